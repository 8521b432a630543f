use crate::pkg::internal::extract::ExtractionFailed;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Extraction(#[from] ExtractionFailed),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
