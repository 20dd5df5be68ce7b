//! Repository for the `questions` table.

use sqlx::PgPool;
use trio_core::pagination::PageWindow;
use trio_core::types::DbId;

use crate::models::question::{CreateQuestion, Question};

const COLUMNS: &str = "id, question, answer, difficulty, category";

/// Provides CRUD, search and quiz queries for trivia questions.
pub struct QuestionRepo;

impl QuestionRepo {
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO questions (question, answer, difficulty, category)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.difficulty)
            .bind(input.category)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(question)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await
    }

    /// One page of questions in ascending id order.
    pub async fn list_page(pool: &PgPool, window: PageWindow) -> Result<Vec<Question>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM questions ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Question>(&query)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Questions whose text matches an `ILIKE` pattern, ordered by id.
    pub async fn search(pool: &PgPool, pattern: &str) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE question ILIKE $1 ORDER BY id ASC");
        sqlx::query_as::<_, Question>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Ids eligible for a quiz: one category, or every question when `None`.
    pub async fn quiz_pool(
        pool: &PgPool,
        category_id: Option<DbId>,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT id FROM questions
             WHERE ($1::BIGINT IS NULL OR category = $1)
             ORDER BY id ASC",
        )
        .bind(category_id)
        .fetch_all(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
