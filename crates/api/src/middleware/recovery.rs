//! Keep panics and timeouts inside the JSON error envelope.
//!
//! `CatchPanicLayer` and `TimeoutLayer` answer with a plain-text body and an
//! empty body respectively; these hooks replace both with [`AppError`]
//! responses.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Response for `CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}

/// `map_response` hook placed outside `TimeoutLayer`.
///
/// No handler answers 408 itself, so any 408 here came from the timeout.
pub async fn timeout_envelope(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::RequestTimeout.into_response();
    }
    response
}
