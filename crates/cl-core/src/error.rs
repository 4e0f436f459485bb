use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value for {what} must be greater than zero (got {value})")]
    NotPositive { what: &'static str, value: f64 },

    #[error("Value for {what} must not be negative (got {value})")]
    Negative { what: &'static str, value: f64 },
}

impl ClError {
    /// Name of the offending quantity.
    pub fn what(&self) -> &'static str {
        match self {
            ClError::NonFinite { what, .. }
            | ClError::NotPositive { what, .. }
            | ClError::Negative { what, .. } => what,
        }
    }
}
