//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// There is exactly one variant per validated field. Each carries the
/// rejected input so the failure message names what was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name does not start with an uppercase letter.
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// The provided birthday year is before the supported minimum.
    #[error("invalid birthday year: {0}")]
    InvalidBirthdayYear(i32),

    /// The provided email address does not match the accepted pattern.
    #[error("invalid email: {0:?}")]
    InvalidEmail(String),

    /// The provided phone number is malformed or out of range.
    #[error("invalid phone: {0:?}")]
    InvalidPhone(String),
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::InvalidName("bob".to_string());
        assert_eq!(err.to_string(), "invalid name: \"bob\"");

        let err = ValidationError::InvalidBirthdayYear(1899);
        assert_eq!(err.to_string(), "invalid birthday year: 1899");

        let err = ValidationError::InvalidEmail("not-an-email".to_string());
        assert_eq!(err.to_string(), "invalid email: \"not-an-email\"");

        let err = ValidationError::InvalidPhone("12345".to_string());
        assert_eq!(err.to_string(), "invalid phone: \"12345\"");
    }
}
