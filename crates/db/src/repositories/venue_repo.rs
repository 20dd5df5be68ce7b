//! Repository for the `venues` table.

use chrono::Utc;
use sqlx::PgPool;
use trio_core::booking::partition_shows;
use trio_core::types::DbId;

use super::clearable;
use crate::models::venue::{
    CreateVenue, UpdateVenue, Venue, VenueAreaRow, VenueDetail, VenueShow, VenueSummary,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
    facebook_link, website_link, seeking_talent, seeking_description";

/// Correlated count of a venue's shows that have not started yet.
const UPCOMING_COUNT: &str =
    "(SELECT COUNT(*) FROM shows s WHERE s.venue_id = v.id AND s.start_time > NOW())";

/// Provides CRUD operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO venues
                (name, city, state, address, phone, genres, image_link,
                 facebook_link, website_link, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(venue)
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a venue together with its past and upcoming shows.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<VenueDetail>, sqlx::Error> {
        let Some(venue) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let shows = Self::shows(pool, id).await?;
        let (past_shows, upcoming_shows) = partition_shows(shows, Utc::now(), |s| s.start_time);
        Ok(Some(VenueDetail {
            venue,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }))
    }

    /// Every show booked at a venue, earliest first.
    pub async fn shows(pool: &PgPool, venue_id: DbId) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT a.id AS artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.start_time ASC, s.id ASC",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// All venues with their location and upcoming show count, ordered by id.
    pub async fn list_area_rows(pool: &PgPool) -> Result<Vec<VenueAreaRow>, sqlx::Error> {
        let query = format!(
            "SELECT v.id, v.name, v.city, v.state, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM venues v
             ORDER BY v.id ASC"
        );
        sqlx::query_as::<_, VenueAreaRow>(&query).fetch_all(pool).await
    }

    /// Venues whose name matches an `ILIKE` pattern, ordered by id.
    pub async fn search(pool: &PgPool, pattern: &str) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "SELECT v.id, v.name, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM venues v
             WHERE v.name ILIKE $1
             ORDER BY v.id ASC"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Update a venue. Only supplied fields in `input` are applied; cleared
    /// fields are stored as `NULL`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE venues SET
                name = COALESCE($2, name),
                city = NULLIF(COALESCE($3, city), ''),
                state = NULLIF(COALESCE($4, state), ''),
                address = NULLIF(COALESCE($5, address), ''),
                phone = NULLIF(COALESCE($6, phone), ''),
                genres = COALESCE($7, genres),
                image_link = NULLIF(COALESCE($8, image_link), ''),
                facebook_link = NULLIF(COALESCE($9, facebook_link), ''),
                website_link = NULLIF(COALESCE($10, website_link), ''),
                seeking_talent = COALESCE($11, seeking_talent),
                seeking_description = NULLIF(COALESCE($12, seeking_description), '')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(clearable(&input.city))
            .bind(clearable(&input.state))
            .bind(clearable(&input.address))
            .bind(clearable(&input.phone))
            .bind(&input.genres)
            .bind(clearable(&input.image_link))
            .bind(clearable(&input.facebook_link))
            .bind(clearable(&input.website_link))
            .bind(input.seeking_talent)
            .bind(clearable(&input.seeking_description))
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(venue)
    }

    /// Delete a venue and, by cascade, its shows. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
