//! Error responses.
//!
//! Request-level failures are values of [`EchoError`]; each maps to a status
//! code and a small JSON body `{"error": <reason phrase>, "description": <text>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors that terminate a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EchoError {
    /// Plaintext request to a non-local host.
    #[error("HTTPS required")]
    HttpsRequired,
}

impl EchoError {
    pub fn status(&self) -> StatusCode {
        match self {
            EchoError::HttpsRequired => StatusCode::FORBIDDEN,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    description: String,
}

impl IntoResponse for EchoError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: status.canonical_reason().unwrap_or("Error"),
            description: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
