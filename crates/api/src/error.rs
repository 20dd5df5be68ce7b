use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use trio_core::error::CoreError;

use crate::auth::error::AuthError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`AuthError`] for gate
/// rejections, and adds HTTP-specific variants. Implements [`IntoResponse`]
/// to produce the JSON error envelope:
///
/// ```json
/// { "success": false, "error": 404, "message": "Resource Not Found",
///   "additional_information": "Question with id 7 not found" }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The auth gate refused the request.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No such route or record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The path exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Well-formed input that cannot be acted on.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// The handler did not finish within the request timeout.
    #[error("Request timed out")]
    RequestTimeout,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const SANITIZED: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::PageOutOfRange { page } => (
                    StatusCode::NOT_FOUND,
                    format!("Page {page} is out of range"),
                ),
                CoreError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, SANITIZED.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "The method is not allowed for the requested URL".to_string(),
            ),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::RequestTimeout => (
                StatusCode::REQUEST_TIMEOUT,
                "The server did not finish the request in time".to_string(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, SANITIZED.to_string())
            }

            // --- Auth gate: the code replaces the reason phrase ---
            AppError::Auth(err) => return envelope(err.status(), err.code(), err.to_string()),
        };

        envelope(status, reason(status), detail)
    }
}

fn envelope(status: StatusCode, message: &str, detail: String) -> Response {
    let body = json!({
        "success": false,
        "error": status.as_u16(),
        "message": message,
        "additional_information": detail,
    });
    (status, axum::Json(body)).into_response()
}

/// Fixed reason phrase per status, matching what existing clients display.
fn reason(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad Request",
        StatusCode::NOT_FOUND => "Resource Not Found",
        StatusCode::METHOD_NOT_ALLOWED => "Method Not Allowed",
        StatusCode::REQUEST_TIMEOUT => "Request Timeout",
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable Entity",
        _ => "Internal Server Error",
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Integrity violations (SQLSTATE class `23`) map to 422.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            match code.as_deref() {
                Some("23505") => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    )
                }
                Some("23503") => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Referenced record does not exist".to_string(),
                ),
                Some(c) if c.starts_with("23") => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        format!("Record violates constraint: {constraint}"),
                    )
                }
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    (StatusCode::INTERNAL_SERVER_ERROR, SANITIZED.to_string())
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, SANITIZED.to_string())
        }
    }
}
