//! Coffee-shop routes. Only `GET /drinks` is public.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::drink;
use crate::state::AppState;

/// ```text
/// GET    /drinks          -> list_drinks (public)
/// GET    /drinks-detail   -> list_drink_details   get:drinks-detail
/// POST   /drinks          -> create_drink         post:drinks
/// PATCH  /drinks/{id}     -> update_drink         patch:drinks
/// DELETE /drinks/{id}     -> delete_drink         delete:drinks
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/drinks", get(drink::list_drinks).post(drink::create_drink))
        .route("/drinks-detail", get(drink::list_drink_details))
        .route(
            "/drinks/{id}",
            patch(drink::update_drink).delete(drink::delete_drink),
        )
}
