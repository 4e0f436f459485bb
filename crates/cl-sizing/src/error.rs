//! Sizing calculation errors.

use cl_core::ClError;
use thiserror::Error;

/// Result type for sizing operations.
pub type CalcResult<T> = Result<T, SizingError>;

/// Errors surfaced by the load calculator and its lookups.
///
/// Both variants are deterministic: retrying with the same input cannot help.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    /// A required quantity is zero, negative or non-finite.
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// No conductivity mapping for an insulation tag.
    #[error("Unknown insulation type '{tag}' (expected one of PUR, PIR, EPS)")]
    Configuration { tag: String },
}

impl SizingError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SizingError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SizingError::InvalidInput { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, SizingError::Configuration { .. })
    }
}

impl From<ClError> for SizingError {
    fn from(err: ClError) -> Self {
        let field = err.what();
        SizingError::InvalidInput {
            field,
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SizingError::Configuration {
            tag: "XPS".to_string(),
        };
        assert!(err.to_string().contains("XPS"));
    }

    #[test]
    fn core_error_maps_to_invalid_input() {
        let err: SizingError = ClError::NotPositive {
            what: "loading_time_hours",
            value: 0.0,
        }
        .into();
        assert!(err.is_invalid_input());
        match err {
            SizingError::InvalidInput { field, reason } => {
                assert_eq!(field, "loading_time_hours");
                assert!(reason.contains("greater than zero"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
