//! Repository for the `shows` table.

use sqlx::PgPool;
use trio_core::types::DbId;

use crate::models::show::{CreateShow, Show, ShowListing};

const COLUMNS: &str = "id, start_time, venue_id, artist_id";

/// Provides CRUD operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a show. Fails with a foreign-key violation if the venue or
    /// artist does not exist.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO shows (start_time, venue_id, artist_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let show = sqlx::query_as::<_, Show>(&query)
            .bind(input.start_time)
            .bind(input.venue_id)
            .bind(input.artist_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(show)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All shows with venue and artist names, ordered by start time.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, v.id AS venue_id, v.name AS venue_name,
                    a.id AS artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             ORDER BY s.start_time ASC, s.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM shows WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
