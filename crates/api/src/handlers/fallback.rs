//! Router fallbacks, so unmatched requests get the JSON error envelope too.

use axum::http::{Method, Uri};

use crate::error::AppError;

/// No route matches the path.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, %uri, "No route");
    AppError::NotFound(format!("No resource at {}", uri.path()))
}

/// A route matches the path but not the method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
