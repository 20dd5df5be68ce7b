use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::venue;
use crate::state::AppState;

/// ```text
/// GET    /venues                -> list_venues
/// POST   /venues/search         -> search_venues
/// POST   /venues/create         -> create_venue
/// GET    /venues/{id}           -> get_venue
/// GET    /venues/{id}/edit      -> edit_venue_form
/// POST   /venues/{id}/edit      -> update_venue
/// DELETE /venues/{id}/delete    -> delete_venue
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venue::list_venues))
        .route("/venues/search", post(venue::search_venues))
        .route("/venues/create", post(venue::create_venue))
        .route("/venues/{id}", get(venue::get_venue))
        .route(
            "/venues/{id}/edit",
            get(venue::edit_venue_form).post(venue::update_venue),
        )
        .route("/venues/{id}/delete", delete(venue::delete_venue))
}
