// src/error.rs

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::catalog::CatalogError;

/// Global Application Error Enum.
/// Each variant maps to one HTTP status and one fixed envelope message.
/// The carried detail is logged, never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // 400 Bad Request
    #[error("bad request: {0}")]
    BadRequest(String),

    // 404 Not Found
    #[error("not found: {0}")]
    NotFound(String),

    // 405 Method Not Allowed
    #[error("method not allowed")]
    MethodNotAllowed,

    // 422 Unprocessable Entity
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    // 500 Internal Server Error
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "Bad request",
            AppError::NotFound(_) => "Resource not found",
            AppError::MethodNotAllowed => "Method not allowed",
            AppError::Unprocessable(_) => "Unprocessable",
            AppError::InternalServerError(_) => "Server error",
        }
    }
}

/// Converts the error into the standard envelope:
/// `{"success": false, "error": <status>, "message": <text>}`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InternalServerError(detail) => {
                tracing::error!("Internal Server Error: {}", detail);
            }
            other => tracing::debug!("Request rejected: {}", other),
        }

        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}

/// Default mapping for catalog failures. Handlers whose contract differs
/// map the error themselves.
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(msg) => AppError::Unprocessable(msg),
            CatalogError::NotFound(msg) => AppError::NotFound(msg),
            CatalogError::Store(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

/// Missing, mistyped or undecodable JSON bodies are unprocessable.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected JSON body: {}", rejection.body_text());
        AppError::Unprocessable(rejection.body_text())
    }
}

/// A path segment that is not a valid identity.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("Rejected path: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    }
}

/// A query string that cannot be decoded, e.g. a repeated key.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("Rejected query: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    }
}

pub async fn not_found_fallback() -> AppError {
    AppError::NotFound("no route".to_string())
}

pub async fn method_not_allowed_fallback() -> AppError {
    AppError::MethodNotAllowed
}
