use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

/// ```text
/// GET    /artists                -> list_artists
/// POST   /artists/search         -> search_artists
/// POST   /artists/create         -> create_artist
/// GET    /artists/{id}           -> get_artist
/// GET    /artists/{id}/edit      -> edit_artist_form
/// POST   /artists/{id}/edit      -> update_artist
/// DELETE /artists/{id}/delete    -> delete_artist
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/artists", get(artist::list_artists))
        .route("/artists/search", post(artist::search_artists))
        .route("/artists/create", post(artist::create_artist))
        .route("/artists/{id}", get(artist::get_artist))
        .route(
            "/artists/{id}/edit",
            get(artist::edit_artist_form).post(artist::update_artist),
        )
        .route("/artists/{id}/delete", delete(artist::delete_artist))
}
