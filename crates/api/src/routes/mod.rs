pub mod artist;
pub mod drink;
pub mod health;
pub mod show;
pub mod trivia;
pub mod venue;

use axum::Router;

use crate::handlers::fallback;
use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /venues                               list grouped by area (GET)
/// /venues/search                        search by name (POST)
/// /venues/create                        create (POST)
/// /venues/{id}                          detail with shows (GET)
/// /venues/{id}/edit                     current values (GET), update (POST)
/// /venues/{id}/delete                   delete (DELETE)
///
/// /artists ...                          same shape as /venues
///
/// /shows                                list (GET)
/// /shows/create                         create (POST)
/// /shows/{id}/delete                    delete (DELETE)
///
/// /categories                           id -> label map (GET)
/// /categories/{id}/questions            questions in a category (GET)
/// /questions                            page of questions (GET), add (POST)
/// /questions/{id}                       delete (DELETE)
/// /questions/search                     search by text (POST)
/// /quizzes                              next unseen question (POST)
///
/// /drinks                               short list (GET, public), add (POST)
/// /drinks/{id}                          update (PATCH), delete (DELETE)
/// /drinks-detail                        long list (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(venue::router())
        .merge(artist::router())
        .merge(show::router())
        .merge(trivia::router())
        .merge(drink::router())
}

/// Health, API routes and JSON fallbacks for unknown paths and methods.
pub fn app_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(api_routes())
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
}
