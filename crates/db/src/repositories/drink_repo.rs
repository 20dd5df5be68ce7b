//! Repository for the `drinks` table.

use sqlx::PgPool;
use trio_core::types::DbId;

use crate::models::drink::{Drink, DrinkPatch, NewDrink};

const COLUMNS: &str = "id, title, recipe";

/// Provides CRUD operations for drinks.
pub struct DrinkRepo;

impl DrinkRepo {
    /// Insert a drink. A duplicate title violates `uq_drinks_title`.
    pub async fn create(pool: &PgPool, input: &NewDrink) -> Result<Drink, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let drink = sqlx::query_as::<_, Drink>(&query)
            .bind(&input.title)
            .bind(&input.recipe)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(drink)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks ORDER BY id ASC");
        sqlx::query_as::<_, Drink>(&query).fetch_all(pool).await
    }

    /// Apply a patch. Returns `None` if the drink does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &DrinkPatch,
    ) -> Result<Option<Drink>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE drinks SET
                title = COALESCE($2, title),
                recipe = COALESCE($3, recipe)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let drink = sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(&patch.recipe)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(drink)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
