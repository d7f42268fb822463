//! API error handling
//!
//! Maps layer errors onto HTTP statuses. Response bodies carry a single
//! `error` field with a generic message; upstream detail is logged but
//! never echoed to the client.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use integration_weather::WeatherError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded".to_string(),
            ),
            Self::Upstream(msg) => {
                warn!(detail = %msg, "Upstream failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Upstream service error".to_string(),
                )
            },
            Self::Internal(msg) => {
                warn!(detail = %msg, "Internal failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            },
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::InvalidInput(msg) => Self::BadRequest(msg),
            ApplicationError::RateLimited => Self::RateLimited,
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::ExternalService(msg) => Self::Upstream(msg),
            ApplicationError::EmptyResponse => {
                Self::Upstream("Empty response from upstream".to_string())
            },
            ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::InvalidCoordinates => {
                Self::BadRequest("Invalid coordinates".to_string())
            },
            other => Self::Upstream(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_message() {
        let err = ApiError::BadRequest("lat is required".to_string());
        assert_eq!(err.to_string(), "Bad request: lat is required");
    }

    #[test]
    fn into_response_bad_request() {
        let err = ApiError::BadRequest("invalid".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn into_response_rate_limited() {
        let response = ApiError::RateLimited.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn into_response_upstream_is_500() {
        let err = ApiError::Upstream("Weather API error: 502".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn into_response_not_found() {
        let err = ApiError::NotFound("User 3".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn application_rate_limited_converts() {
        let result: ApiError = ApplicationError::RateLimited.into();
        assert!(matches!(result, ApiError::RateLimited));
    }

    #[test]
    fn application_external_service_converts_to_upstream() {
        let result: ApiError =
            ApplicationError::ExternalService("api down".to_string()).into();
        assert!(matches!(result, ApiError::Upstream(_)));
    }

    #[test]
    fn application_empty_response_converts_to_upstream() {
        let result: ApiError = ApplicationError::EmptyResponse.into();
        assert!(matches!(result, ApiError::Upstream(_)));
    }

    #[test]
    fn application_invalid_input_converts_to_bad_request() {
        let result: ApiError =
            ApplicationError::InvalidInput("lat is required".to_string()).into();
        assert!(matches!(result, ApiError::BadRequest(_)));
    }

    #[test]
    fn weather_invalid_coordinates_converts_to_bad_request() {
        let result: ApiError = WeatherError::InvalidCoordinates.into();
        assert!(matches!(result, ApiError::BadRequest(_)));
    }

    #[test]
    fn weather_request_failed_converts_to_upstream() {
        let result: ApiError =
            WeatherError::RequestFailed("Weather API error: 500".to_string()).into();
        assert!(matches!(result, ApiError::Upstream(_)));
    }

    #[test]
    fn error_body_has_single_error_field() {
        let body = ErrorResponse {
            error: "Upstream service error".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "Upstream service error"})
        );
    }
}
