//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Repository error: {message}")]
    Repository { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DomainError::NotFound {
            resource: "Account alice".to_string(),
        };
        assert_eq!(err.to_string(), "Resource not found: Account alice");

        let err = DomainError::Validation {
            message: "username must not be blank".to_string(),
        };
        assert!(err.to_string().starts_with("Validation error"));
    }
}
