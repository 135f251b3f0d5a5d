use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Planner error: {0}")]
    PlannerError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<crate::modules::chat::ApplicationError> for AppError {
    fn from(err: crate::modules::chat::ApplicationError) -> Self {
        AppError::Unknown(err.to_string())
    }
}

impl From<crate::modules::config::ConfigError> for AppError {
    fn from(err: crate::modules::config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
