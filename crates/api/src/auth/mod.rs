//! Bearer-token authorization.
//!
//! [`verifier`] checks a token against the issuer's published keys,
//! [`gate`] turns request headers plus a required permission into either
//! verified [`Claims`](verifier::Claims) or an [`AuthError`](error::AuthError).

pub mod error;
pub mod gate;
pub mod verifier;
