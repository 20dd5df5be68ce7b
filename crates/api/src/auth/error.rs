use axum::http::StatusCode;

/// Every way the auth gate can refuse a request.
///
/// The display text is the human-readable description sent to clients as
/// `additional_information`; [`AuthError::code`] is the machine-readable
/// code sent as `message`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header is expected.")]
    HeaderMissing,

    #[error("Authorization header must be of the form 'Bearer <token>'.")]
    MalformedHeader,

    #[error("Unable to parse authentication token.")]
    InvalidToken,

    #[error("Unable to find the appropriate key.")]
    KeyNotFound,

    #[error("Token expired.")]
    TokenExpired,

    #[error("Incorrect claims. Please, check the audience and issuer.")]
    InvalidClaims,

    #[error("Permissions not included in JWT.")]
    PermissionsMissing,

    #[error("Permission not found.")]
    PermissionDenied,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::HeaderMissing
            | AuthError::MalformedHeader
            | AuthError::TokenExpired
            | AuthError::InvalidClaims => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken | AuthError::KeyNotFound | AuthError::PermissionsMissing => {
                StatusCode::BAD_REQUEST
            }
            AuthError::PermissionDenied => StatusCode::FORBIDDEN,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AuthError::HeaderMissing => "authorization_header_missing",
            AuthError::MalformedHeader | AuthError::InvalidToken | AuthError::KeyNotFound => {
                "invalid_header"
            }
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims | AuthError::PermissionsMissing => "invalid_claims",
            AuthError::PermissionDenied => "unauthorized",
        }
    }
}
