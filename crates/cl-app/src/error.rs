//! Error types for the cl-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the lower crates for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read job file: {path}")]
    JobFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write job file: {path}")]
    JobFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse job file {path}: {message}")]
    JobParse { path: PathBuf, message: String },

    #[error("Job validation failed: {0}")]
    Validation(String),

    #[error("Sizing error: {0}")]
    Sizing(#[from] cl_sizing::SizingError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for cl-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
