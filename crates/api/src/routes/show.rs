use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::show;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shows", get(show::list_shows))
        .route("/shows/create", post(show::create_show))
        .route("/shows/{id}/delete", delete(show::delete_show))
}
