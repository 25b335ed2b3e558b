use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error taxonomy for the request pipeline.
///
/// Every variant maps to a user-safe `{"detail": ...}` body; internals and
/// upstream status codes are logged server-side, never returned to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream request timed out")]
    UpstreamTimeout,

    #[error("Upstream service unreachable")]
    UpstreamUnavailable,

    #[error("Upstream service returned a failure")]
    UpstreamError,

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            detail: String,
        }

        let (status, detail) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "AI request timed out. Please try again.".to_string(),
            ),
            AppError::UpstreamUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Cannot reach AI service. Check your internet connection.".to_string(),
            ),
            AppError::UpstreamError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI service temporarily unavailable.".to_string(),
            ),
            AppError::InternalError(err) => {
                tracing::error!("Unexpected error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
            AppError::ConfigError(err) => {
                tracing::error!("Configuration error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let response = AppError::InvalidInput("Action description is required.".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_timeout_maps_to_gateway_timeout() {
        let response = AppError::UpstreamTimeout.into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn upstream_unavailable_maps_to_service_unavailable() {
        let response = AppError::UpstreamUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn internal_errors_never_leak_details() {
        let response = AppError::InternalError(anyhow::anyhow!("secret db password")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
