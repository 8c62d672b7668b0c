//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Record not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record store query or write failure.
    ///
    /// A failed store lookup must surface as this variant and abort the
    /// operation that needed it. It must never be collapsed into an
    /// empty-result answer: number generation in particular would silently
    /// restart a series if a transient query failure were reported as
    /// "no prior document".
    #[error("Record store error: {0}")]
    Store(String),

    /// Encoding or decoding of a stored field failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code used in log lines and export diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Store(_) => "STORE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Store("connection refused".to_string());
        assert_eq!(err.to_string(), "Record store error: connection refused");
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            AppError::NotFound(String::new()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(AppError::Store(String::new()).error_code(), "STORE_ERROR");
        assert_eq!(
            AppError::Serialization(String::new()).error_code(),
            "SERIALIZATION_ERROR"
        );
    }
}
