use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ConsoleError {
    /// Probe or connect failure; the driver message is passed through verbatim.
    #[error("{0}")]
    Connection(String),

    #[error("Database not initialized. Please login again.")]
    NotInitialized,

    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match &self {
            ConsoleError::Connection(_) => (StatusCode::UNAUTHORIZED, "CONNECTION_FAILED"),
            ConsoleError::NotInitialized => (StatusCode::UNAUTHORIZED, "NOT_INITIALIZED"),
            ConsoleError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ConsoleError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ConsoleError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
        };
        let body = ApiErrorBody {
            code: code.to_string(),
            message: self.to_string(),
        };
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
