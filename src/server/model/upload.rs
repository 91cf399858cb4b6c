//! Uploaded image files and the rules they are checked against.

use validator::ValidationError;

use crate::server::util::validation::rule_error;

/// Maximum image size accepted when creating a post, in KiB.
pub const CREATE_IMAGE_MAX_KIB: usize = 10002;

/// Maximum image size accepted when replacing a post's image, in KiB.
pub const UPDATE_IMAGE_MAX_KIB: usize = 2048;

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
}

impl ImageFormat {
    /// Extension the stored file is given.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }

    /// Detects the format from the file signature.
    ///
    /// The client supplied name and content type are ignored since either can be forged.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(Self::Png)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else {
            None
        }
    }
}

/// A file received in the `image` field of a multipart form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Checks the file is a jpeg, png or gif no larger than `max_kib`.
    ///
    /// # Returns
    /// - `Ok(ImageFormat)` - The detected format of an acceptable file
    /// - `Err(ValidationError)` - Unsupported type or oversized file
    pub fn check(&self, max_kib: usize) -> Result<ImageFormat, ValidationError> {
        let format = ImageFormat::detect(&self.bytes).ok_or_else(|| {
            rule_error(
                "mimes",
                "The image field must be a file of type: jpeg, png, jpg, gif.",
            )
        })?;

        if self.bytes.len() > max_kib * 1024 {
            return Err(rule_error(
                "max",
                format!(
                    "The image field must not be greater than {} kilobytes.",
                    max_kib
                ),
            ));
        }

        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    fn upload(bytes: Vec<u8>) -> ImageUpload {
        ImageUpload {
            file_name: Some("photo.png".to_string()),
            content_type: Some("image/png".to_string()),
            bytes,
        }
    }

    #[test]
    fn detects_supported_formats() {
        assert_eq!(
            ImageFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::detect(PNG), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::detect(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::detect(b"%PDF-1.7"), None);
        assert_eq!(ImageFormat::detect(&[]), None);
    }

    #[test]
    fn rejects_file_with_forged_content_type() {
        let result = upload(b"<?php echo 1; ?>".to_vec()).check(UPDATE_IMAGE_MAX_KIB);

        let err = result.unwrap_err();
        assert_eq!(err.code, "mimes");
    }

    #[test]
    fn enforces_size_limit() {
        let mut bytes = PNG.to_vec();
        bytes.resize(UPDATE_IMAGE_MAX_KIB * 1024 + 1, 0);

        let err = upload(bytes.clone())
            .check(UPDATE_IMAGE_MAX_KIB)
            .unwrap_err();
        assert_eq!(err.code, "max");

        // Same file is fine under the larger limit used on creation
        assert_eq!(
            upload(bytes).check(CREATE_IMAGE_MAX_KIB).unwrap(),
            ImageFormat::Png
        );
    }
}
