use thiserror::Error;

/// Failures of the public image disk.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading, writing or removing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The relative path escapes the storage root or is otherwise unusable.
    ///
    /// Stored paths are generated by the server, so this indicates tampered or
    /// corrupted data and results in a 500 Internal Server Error.
    #[error("Invalid storage path '{0}'")]
    InvalidPath(String),
}
