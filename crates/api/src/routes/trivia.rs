//! Trivia routes: categories, questions and quizzes.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{quiz, trivia};
use crate::state::AppState;

/// ```text
/// GET    /categories                  -> list_categories
/// GET    /categories/{id}/questions   -> category_questions
/// GET    /questions?page=N            -> list_questions
/// POST   /questions                   -> create_question
/// DELETE /questions/{id}              -> delete_question
/// POST   /questions/search            -> search_questions
/// POST   /quizzes                     -> next_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(trivia::list_categories))
        .route("/categories/{id}/questions", get(trivia::category_questions))
        .route(
            "/questions",
            get(trivia::list_questions).post(trivia::create_question),
        )
        .route("/questions/{id}", delete(trivia::delete_question))
        .route("/questions/search", post(trivia::search_questions))
        .route("/quizzes", post(quiz::next_question))
}
