//! Inference errors

use thiserror::Error;

/// Errors that can occur when calling the completion provider
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to the completion provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the completion provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider succeeded but returned no usable content
    #[error("Empty response from completion provider")]
    EmptyResponse,

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Quota exhausted or rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Provider-side error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            InferenceError::Timeout(30000)
        } else if err.is_connect() {
            InferenceError::ConnectionFailed(err.to_string())
        } else {
            InferenceError::RequestFailed(err.to_string())
        }
    }
}
