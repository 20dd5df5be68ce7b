use std::sync::Arc;

use crate::auth::verifier::TokenVerifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable and never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: trio_db::DbPool,
    /// Bearer-token verifier holding the issuer's signing keys.
    pub verifier: Arc<TokenVerifier>,
}
