use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use battle_rap_api::ApiError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] ApiError),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Bad Gateway: {0}")]
    BadGateway(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::BadGateway(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
        }

        let (status, error_message, details) = match self {
            GatewayError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            GatewayError::Upstream(err) => match err {
                // Upstream status failures keep their status and message so
                // the browser sees what the API said.
                ApiError::Status {
                    status, message, ..
                } => (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                    message,
                    None,
                ),
                ApiError::Transport(err) => (
                    StatusCode::BAD_GATEWAY,
                    "Upstream request failed".to_string(),
                    Some(err.to_string()),
                ),
                ApiError::Decode { url, source } => (
                    StatusCode::BAD_GATEWAY,
                    format!("Invalid response from {}", url),
                    Some(source.to_string()),
                ),
                ApiError::Config(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                    Some(err.to_string()),
                ),
            },
            GatewayError::Session(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Session error".to_string(),
                Some(err.to_string()),
            ),
            GatewayError::BadGateway(msg) => {
                (StatusCode::BAD_GATEWAY, format!("Bad Gateway: {}", msg), None)
            }
            GatewayError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(err.to_string()),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                details,
            }),
        )
            .into_response()
    }
}
