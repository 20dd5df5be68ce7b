//! Token verification against the issuer's JSON Web Key Set.
//!
//! The key set is fetched once at startup; tokens are checked for a known
//! `kid`, an allowed algorithm, a valid signature, `exp`, `iss` and `aud`.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use crate::config::AuthConfig;

/// Claims the API reads from a verified token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, usually the issuer's user id.
    pub sub: Option<String>,
    /// Scopes granted to the caller. Absent when the issuer's API has RBAC
    /// disabled.
    pub permissions: Option<Vec<String>>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Verifies bearer tokens with a fixed key set.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    keys: JwkSet,
    issuer: String,
    audience: String,
    algorithms: Vec<Algorithm>,
}

impl TokenVerifier {
    pub fn new(keys: JwkSet, config: &AuthConfig) -> Self {
        Self {
            keys,
            issuer: config.issuer(),
            audience: config.audience.clone(),
            algorithms: config.algorithms.clone(),
        }
    }

    /// Download the issuer's key set and build a verifier from it.
    pub async fn fetch(config: &AuthConfig) -> Result<Self, reqwest::Error> {
        let keys = reqwest::get(config.jwks_url())
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await?;
        tracing::info!(keys = keys.keys.len(), issuer = %config.issuer(), "Fetched signing keys");
        Ok(Self::new(keys, config))
    }

    /// Verify `token` and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::InvalidToken)?;

        let kid = header.kid.as_deref().ok_or(AuthError::KeyNotFound)?;
        let jwk = self.keys.find(kid).ok_or(AuthError::KeyNotFound)?;

        if !self.algorithms.contains(&header.alg) {
            return Err(AuthError::InvalidToken);
        }

        let key = DecodingKey::from_jwk(jwk).map_err(|_| AuthError::KeyNotFound)?;

        let mut validation = Validation::new(header.alg);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        decode::<Claims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|err| classify(err.kind()))
    }
}

fn classify(kind: &ErrorKind) -> AuthError {
    match kind {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => AuthError::InvalidClaims,
        ErrorKind::MissingRequiredClaim(claim) if claim == "iss" || claim == "aud" => {
            AuthError::InvalidClaims
        }
        _ => AuthError::InvalidToken,
    }
}
