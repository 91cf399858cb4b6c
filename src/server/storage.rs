//! Public disk for uploaded images.
//!
//! Files are written below a single root directory and addressed by a relative path such
//! as `images/3fK...q.png`. That relative path is what gets persisted on rows (post and
//! product images) and what the router serves under `/storage`.

use std::path::{Component, Path, PathBuf};

use dioxus_logger::tracing;
use rand::Rng;
use tokio::fs;

use crate::server::error::storage::StorageError;

/// Directory below the storage root that uploaded images are written to.
pub const IMAGE_DIRECTORY: &str = "images";

/// Length of the random part of generated file names.
const FILE_NAME_LENGTH: usize = 40;

/// Local filesystem storage for publicly served uploads.
///
/// Cheap to clone; only the root path is held.
#[derive(Debug, Clone)]
pub struct ImageStorage {
    root: PathBuf,
}

impl ImageStorage {
    /// Creates a storage rooted at the provided directory.
    ///
    /// The directory does not need to exist yet; it is created on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `bytes` to a new file with a random name inside `directory`.
    ///
    /// # Arguments
    /// - `directory` - Relative directory below the root (e.g. `images`)
    /// - `bytes` - File contents
    /// - `extension` - File extension without the leading dot
    ///
    /// # Returns
    /// - `Ok(String)` - Relative path of the stored file, e.g. `images/<40 chars>.png`
    /// - `Err(StorageError::InvalidPath)` - `directory` escapes the root
    /// - `Err(StorageError::Io)` - Failed to create the directory or write the file
    pub async fn store(
        &self,
        directory: &str,
        bytes: &[u8],
        extension: &str,
    ) -> Result<String, StorageError> {
        let relative = format!("{}/{}.{}", directory, Self::random_file_name(), extension);
        let full_path = self.full_path(&relative)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&full_path, bytes).await?;

        Ok(relative)
    }

    /// Checks whether a file exists at the relative path.
    pub async fn exists(&self, path: &str) -> Result<bool, StorageError> {
        let full_path = self.full_path(path)?;

        Ok(fs::try_exists(&full_path).await?)
    }

    /// Deletes the file at the relative path.
    ///
    /// # Returns
    /// - `Ok(true)` - The file existed and was removed
    /// - `Ok(false)` - There was no file at that path
    /// - `Err(StorageError)` - Invalid path or filesystem failure
    pub async fn delete(&self, path: &str) -> Result<bool, StorageError> {
        let full_path = self.full_path(path)?;

        match fs::remove_file(&full_path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes a file that no row references any more.
    ///
    /// Failures are logged; the database change that orphaned the file stands.
    pub async fn discard(&self, path: Option<&str>) {
        let Some(path) = path else {
            return;
        };

        match self.delete(path).await {
            Ok(true) => {}
            Ok(false) => tracing::warn!("Image {} was already missing from storage", path),
            Err(e) => tracing::error!("Failed to delete image {}: {}", path, e),
        }
    }

    /// Resolves a relative path against the root, rejecting anything that could escape it.
    fn full_path(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(path);

        let is_plain = !path.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));

        if !is_plain {
            return Err(StorageError::InvalidPath(path.to_string()));
        }

        Ok(self.root.join(relative))
    }

    fn random_file_name() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..FILE_NAME_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> (ImageStorage, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        (ImageStorage::new(dir.path()), dir)
    }

    #[tokio::test]
    async fn stores_file_under_directory_with_random_name() {
        let (storage, _dir) = storage();

        let path = storage
            .store(IMAGE_DIRECTORY, b"png-bytes", "png")
            .await
            .unwrap();

        assert!(path.starts_with("images/"));
        assert!(path.ends_with(".png"));
        assert_eq!(path.len(), "images/".len() + FILE_NAME_LENGTH + ".png".len());
        assert!(storage.exists(&path).await.unwrap());

        let written = std::fs::read(storage.root().join(&path)).unwrap();
        assert_eq!(written, b"png-bytes");
    }

    #[tokio::test]
    async fn generates_distinct_names() {
        let (storage, _dir) = storage();

        let first = storage.store(IMAGE_DIRECTORY, b"a", "gif").await.unwrap();
        let second = storage.store(IMAGE_DIRECTORY, b"b", "gif").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn delete_reports_whether_file_existed() {
        let (storage, _dir) = storage();
        let path = storage.store(IMAGE_DIRECTORY, b"x", "jpg").await.unwrap();

        assert!(storage.delete(&path).await.unwrap());
        assert!(!storage.exists(&path).await.unwrap());
        assert!(!storage.delete(&path).await.unwrap());
    }

    #[tokio::test]
    async fn discard_tolerates_missing_files() {
        let (storage, _dir) = storage();
        let path = storage.store(IMAGE_DIRECTORY, b"x", "png").await.unwrap();

        storage.discard(Some(&path)).await;
        assert!(!storage.exists(&path).await.unwrap());

        storage.discard(Some(&path)).await;
        storage.discard(None).await;
    }

    #[tokio::test]
    async fn rejects_paths_escaping_the_root() {
        let (storage, _dir) = storage();

        for path in ["../secret.txt", "/etc/passwd", "images/../../x", ""] {
            let result = storage.delete(path).await;
            assert!(
                matches!(result, Err(StorageError::InvalidPath(_))),
                "expected {path:?} to be rejected"
            );
        }
    }
}
