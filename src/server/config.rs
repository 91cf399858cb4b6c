use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_STORAGE_PATH: &str = "storage/app/public";

pub struct Config {
    pub database_url: String,

    /// Root directory of the public disk that uploaded images are written to.
    pub storage_path: String,

    /// Origin allowed to call the API cross-site, if the front-end is served separately.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            storage_path: std::env::var("STORAGE_PATH")
                .unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
        })
    }
}
