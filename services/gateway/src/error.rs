//! Gateway error taxonomy
//!
//! Client-visible bodies intentionally reproduce the upstream dashboard's
//! shapes rather than a shared envelope: the gateway is transparent, and its
//! callers already parse these exact forms.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Any failure on the login path, including upstream network errors.
    #[error("authentication failed")]
    AuthFailed,

    #[error("authorization header is required")]
    MissingAuth,

    /// Upstream answered the chatbot call with a non-success status.
    #[error("chatbot upstream returned {0}")]
    ChatbotUnavailable(StatusCode),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            GatewayError::AuthFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "status": "error", "message": "Authentication failed" }),
            ),
            GatewayError::MissingAuth => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Authorization header is required" }),
            ),
            GatewayError::ChatbotUnavailable(status) => {
                (status, json!({ "error": "Chatbot service unavailable" }))
            },
            GatewayError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
