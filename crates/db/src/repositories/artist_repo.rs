//! Repository for the `artists` table.

use chrono::Utc;
use sqlx::PgPool;
use trio_core::booking::partition_shows;
use trio_core::types::DbId;

use super::clearable;
use crate::models::artist::{
    Artist, ArtistDetail, ArtistListItem, ArtistShow, ArtistSummary, CreateArtist, UpdateArtist,
};

const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, \
    facebook_link, website_link, seeking_venue, seeking_description";

const UPCOMING_COUNT: &str =
    "(SELECT COUNT(*) FROM shows s WHERE s.artist_id = a.id AND s.start_time > NOW())";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO artists
                (name, city, state, phone, genres, image_link,
                 facebook_link, website_link, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(artist)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArtistDetail>, sqlx::Error> {
        let Some(artist) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let shows = Self::shows(pool, id).await?;
        let (past_shows, upcoming_shows) = partition_shows(shows, Utc::now(), |s| s.start_time);
        Ok(Some(ArtistDetail {
            artist,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }))
    }

    /// Every show an artist is booked for, earliest first.
    pub async fn shows(pool: &PgPool, artist_id: DbId) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT v.id AS venue_id, v.name AS venue_name,
                    v.image_link AS venue_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.start_time ASC, s.id ASC",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ArtistListItem>, sqlx::Error> {
        sqlx::query_as::<_, ArtistListItem>("SELECT id, name FROM artists ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Artists whose name matches an `ILIKE` pattern, ordered by id.
    pub async fn search(pool: &PgPool, pattern: &str) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let query = format!(
            "SELECT a.id, a.name, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM artists a
             WHERE a.name ILIKE $1
             ORDER BY a.id ASC"
        );
        sqlx::query_as::<_, ArtistSummary>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Apply the supplied fields. Returns `None` if the artist does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE artists SET
                name = COALESCE($2, name),
                city = NULLIF(COALESCE($3, city), ''),
                state = NULLIF(COALESCE($4, state), ''),
                phone = NULLIF(COALESCE($5, phone), ''),
                genres = COALESCE($6, genres),
                image_link = NULLIF(COALESCE($7, image_link), ''),
                facebook_link = NULLIF(COALESCE($8, facebook_link), ''),
                website_link = NULLIF(COALESCE($9, website_link), ''),
                seeking_venue = COALESCE($10, seeking_venue),
                seeking_description = NULLIF(COALESCE($11, seeking_description), '')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(clearable(&input.city))
            .bind(clearable(&input.state))
            .bind(clearable(&input.phone))
            .bind(&input.genres)
            .bind(clearable(&input.image_link))
            .bind(clearable(&input.facebook_link))
            .bind(clearable(&input.website_link))
            .bind(input.seeking_venue)
            .bind(clearable(&input.seeking_description))
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(artist)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
