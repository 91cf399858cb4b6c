//! State handed to every handler through `State<AppState>`.

use sea_orm::DatabaseConnection;

use super::storage::ImageStorage;

/// Cloned per request; the connection is a pool and the storage only holds its root path.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Public disk for post and product images.
    pub storage: ImageStorage,
}

impl AppState {
    pub fn new(db: DatabaseConnection, storage: ImageStorage) -> Self {
        Self { db, storage }
    }
}
