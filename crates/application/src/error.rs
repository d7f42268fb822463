//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Malformed or missing input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upstream service failed (non-success status or transport failure)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Upstream succeeded but returned no usable content
    #[error("Empty response from upstream")]
    EmptyResponse,

    /// Upstream signaled quota or rate-limit exhaustion
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Referenced entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_converts_transparently() {
        let err: ApplicationError = DomainError::not_found("User", "3").into();
        assert_eq!(err.to_string(), "User not found: 3");
    }

    #[test]
    fn invalid_input_message() {
        let err = ApplicationError::InvalidInput("lat is required".to_string());
        assert_eq!(err.to_string(), "Invalid input: lat is required");
    }

    #[test]
    fn rate_limited_message() {
        assert_eq!(
            ApplicationError::RateLimited.to_string(),
            "Rate limit exceeded"
        );
    }

    #[test]
    fn empty_response_message() {
        assert_eq!(
            ApplicationError::EmptyResponse.to_string(),
            "Empty response from upstream"
        );
    }
}
