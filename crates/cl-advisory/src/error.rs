//! Advisory provider errors.
//!
//! These never leave [`crate::get_advisory`]; they exist so providers can
//! report what went wrong for logging.

use thiserror::Error;

pub type AdvisoryResult<T> = Result<T, AdvisoryError>;

#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("Advisory credential not configured (set {env_var})")]
    MissingCredential { env_var: String },

    #[error("Advisory request timed out")]
    Timeout,

    #[error("Advisory service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Advisory transport error: {0}")]
    Transport(String),

    #[error("Malformed advisory response: {0}")]
    Malformed(String),

    #[error("Advisory service unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for AdvisoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AdvisoryError::Timeout
        } else if let Some(status) = err.status() {
            AdvisoryError::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            AdvisoryError::Malformed(err.to_string())
        } else {
            AdvisoryError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AdvisoryError {
    fn from(err: serde_json::Error) -> Self {
        AdvisoryError::Malformed(err.to_string())
    }
}
