//! Permission extractors for the coffee-shop routes.
//!
//! [`RequirePermission<P>`] runs the auth gate for the scope named by the
//! marker type `P`. Put it first in a handler's argument list: it only reads
//! headers, so a rejected request never has its body parsed and never
//! reaches the store.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use trio_core::permissions;

use crate::auth::gate::authorize;
use crate::auth::verifier::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// A scope that a route can require.
pub trait Permission: Send + Sync + 'static {
    const NAME: &'static str;
}

pub struct GetDrinksDetail;
pub struct PostDrinks;
pub struct PatchDrinks;
pub struct DeleteDrinks;

impl Permission for GetDrinksDetail {
    const NAME: &'static str = permissions::GET_DRINKS_DETAIL;
}

impl Permission for PostDrinks {
    const NAME: &'static str = permissions::POST_DRINKS;
}

impl Permission for PatchDrinks {
    const NAME: &'static str = permissions::PATCH_DRINKS;
}

impl Permission for DeleteDrinks {
    const NAME: &'static str = permissions::DELETE_DRINKS;
}

/// Verified caller holding permission `P`.
///
/// ```ignore
/// async fn detail(auth: RequirePermission<GetDrinksDetail>) -> AppResult<Json<()>> {
///     tracing::info!(sub = ?auth.claims.sub, "detail requested");
///     Ok(Json(()))
/// }
/// ```
pub struct RequirePermission<P: Permission> {
    pub claims: Claims,
    permission: PhantomData<P>,
}

impl<P: Permission> FromRequestParts<AppState> for RequirePermission<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = authorize(&parts.headers, P::NAME, &state.verifier).map_err(|err| {
            tracing::warn!(
                permission = P::NAME,
                code = err.code(),
                path = %parts.uri.path(),
                "Request rejected by auth gate",
            );
            AppError::Auth(err)
        })?;

        Ok(Self {
            claims,
            permission: PhantomData,
        })
    }
}
