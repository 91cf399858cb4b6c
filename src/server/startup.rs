use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    storage::ImageStorage,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Prepares the public image disk, creating its root directory if needed.
///
/// # Returns
/// - `Ok(ImageStorage)` - Storage rooted at `config.storage_path`
/// - `Err(AppError::StorageErr)` - The root directory could not be created
pub async fn setup_storage(config: &Config) -> Result<ImageStorage, AppError> {
    let storage = ImageStorage::new(&config.storage_path);

    tokio::fs::create_dir_all(storage.root())
        .await
        .map_err(crate::server::error::storage::StorageError::from)?;

    Ok(storage)
}

/// Builds the CORS layer for a separately hosted front-end.
///
/// Returns `None` when no origin is configured, in which case the API is only
/// reachable same-origin.
pub fn setup_cors(config: &Config) -> Result<Option<CorsLayer>, AppError> {
    let Some(origin) = config.cors_origin.as_deref() else {
        return Ok(None);
    };

    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CORS_ORIGIN".to_string(),
        reason: e.to_string(),
    })?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    ))
}
