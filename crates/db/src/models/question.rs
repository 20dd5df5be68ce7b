//! Trivia question model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trio_core::lenient;
use trio_core::types::DbId;
use validator::Validate;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub difficulty: Option<i32>,
    pub category: Option<DbId>,
}

/// DTO for adding a question.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateQuestion {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    #[validate(range(min = 1, max = 5))]
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub category: Option<DbId>,
}
