//! POST /quizzes: draw the next unseen question.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize, Serializer};
use trio_core::lenient;
use trio_core::quiz::{category_filter, pick_next};
use trio_core::types::DbId;
use trio_db::models::question::Question;
use trio_db::repositories::QuestionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    pub quiz_category: QuizCategory,
}

/// The category picked on the quiz screen. Id `0` means every category.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient::number")]
    pub id: DbId,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NextQuestion {
    /// `false` once the player has seen every question in the category.
    #[serde(serialize_with = "false_when_none")]
    pub question: Option<Question>,
}

fn false_when_none<S: Serializer>(
    question: &Option<Question>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match question {
        Some(q) => q.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

pub async fn next_question(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuizRequest>,
) -> AppResult<Json<Success<NextQuestion>>> {
    let category = category_filter(request.quiz_category.id);
    let candidates = QuestionRepo::quiz_pool(&state.pool, category).await?;

    let Some(question_id) = pick_next(&candidates, &request.previous_questions) else {
        tracing::debug!(
            category = ?category,
            seen = request.previous_questions.len(),
            "Quiz exhausted",
        );
        return Ok(Json(Success::new(NextQuestion { question: None })));
    };

    // Deleted between the pool query and now.
    let question = QuestionRepo::find_by_id(&state.pool, question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {question_id} disappeared")))?;

    Ok(Json(Success::new(NextQuestion {
        question: Some(question),
    })))
}
