//! Handlers for trivia categories and questions.
//!
//! Question listings are paginated ten at a time in ascending id order and
//! always carry the full category map so a client can label each question.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use trio_core::error::CoreError;
use trio_core::pagination::PageWindow;
use trio_core::search::contains_pattern;
use trio_core::types::DbId;
use trio_core::validation::{require_text, validate_input};
use trio_db::models::question::{CreateQuestion, Question};
use trio_db::repositories::{CategoryRepo, QuestionRepo};
use trio_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::PageParams;
use crate::response::Success;
use crate::state::AppState;

/// Category id to label, serialized as `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<DbId, String>;

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionMatches {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionCreated {
    pub created: DbId,
}

#[derive(Debug, Serialize)]
pub struct QuestionDeleted {
    pub deleted: DbId,
}

#[derive(Debug, Deserialize)]
pub struct QuestionSearch {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

async fn category_map(pool: &DbPool) -> Result<CategoryMap, sqlx::Error> {
    let categories = CategoryRepo::list(pool).await?;
    Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
}

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Success<CategoryList>>> {
    let categories = category_map(&state.pool).await?;
    Ok(Json(Success::new(CategoryList { categories })))
}

/// GET /questions?page=N
///
/// A page past the last populated one is 404, as are page 0 and below.
pub async fn list_questions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<Success<QuestionPage>>> {
    let window = PageWindow::for_page(params.page())?;
    let total_questions = QuestionRepo::count(&state.pool).await?;
    window.ensure_within(total_questions)?;

    let questions = QuestionRepo::list_page(&state.pool, window).await?;
    let categories = category_map(&state.pool).await?;

    Ok(Json(Success::new(QuestionPage {
        questions,
        total_questions,
        categories,
        current_category: None,
    })))
}

/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateQuestion>,
) -> AppResult<Json<Success<QuestionCreated>>> {
    validate_input(&input)?;
    require_text("question", &input.question)?;
    require_text("answer", &input.answer)?;

    let question = QuestionRepo::create(&state.pool, &input).await.map_err(|err| {
        tracing::warn!(error = %err, category = ?input.category, "Question could not be added");
        err
    })?;

    tracing::info!(question_id = question.id, category = ?question.category, "Question added");

    Ok(Json(Success::new(QuestionCreated {
        created: question.id,
    })))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<AppState>,
    ApiPath(question_id): ApiPath<DbId>,
) -> AppResult<Json<Success<QuestionDeleted>>> {
    if !QuestionRepo::delete(&state.pool, question_id).await? {
        return Err(AppError::Unprocessable(format!(
            "Question with id {question_id} does not exist"
        )));
    }

    tracing::info!(question_id, "Question deleted");

    Ok(Json(Success::new(QuestionDeleted {
        deleted: question_id,
    })))
}

/// POST /questions/search
///
/// A missing or blank `searchTerm` is 422; a term with no matches is an
/// ordinary empty result.
pub async fn search_questions(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<QuestionSearch>,
) -> AppResult<Json<Success<QuestionMatches>>> {
    let term = body.search_term.unwrap_or_default();
    require_text("searchTerm", &term)?;

    let questions = QuestionRepo::search(&state.pool, &contains_pattern(&term)).await?;

    Ok(Json(Success::new(QuestionMatches {
        total_questions: questions.len(),
        questions,
        current_category: None,
    })))
}

/// GET /categories/{id}/questions
pub async fn category_questions(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<DbId>,
) -> AppResult<Json<Success<QuestionMatches>>> {
    let category = CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        })?;

    let questions = QuestionRepo::list_by_category(&state.pool, category.id).await?;

    Ok(Json(Success::new(QuestionMatches {
        total_questions: questions.len(),
        questions,
        current_category: Some(category.kind),
    })))
}
