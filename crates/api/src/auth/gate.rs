//! The permission gate run in front of protected handlers.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use trio_core::permissions::is_granted;

use super::error::AuthError;
use super::verifier::{Claims, TokenVerifier};

/// Pull the token out of an `Authorization: Bearer <token>` value.
///
/// The scheme is matched case-insensitively; anything other than exactly
/// two whitespace-separated parts is malformed.
pub fn bearer_token(value: &str) -> Result<&str, AuthError> {
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// The caller's claims must carry a `permissions` list containing `permission`.
pub fn check_permission(claims: &Claims, permission: &str) -> Result<(), AuthError> {
    let granted = claims
        .permissions
        .as_deref()
        .ok_or(AuthError::PermissionsMissing)?;
    if !is_granted(granted, permission) {
        return Err(AuthError::PermissionDenied);
    }
    Ok(())
}

/// Authorize a request for `permission` from its headers alone.
pub fn authorize(
    headers: &HeaderMap,
    permission: &str,
    verifier: &TokenVerifier,
) -> Result<Claims, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::HeaderMissing)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let token = bearer_token(value)?;
    let claims = verifier.verify(token)?;
    check_permission(&claims, permission)?;
    Ok(claims)
}
