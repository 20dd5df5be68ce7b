//! Show entity model and DTOs.
//!
//! A show joins exactly one venue and one artist; both foreign keys are
//! `NOT NULL` so the store refuses a show whose venue or artist is missing.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trio_core::types::{DbId, Timestamp};

/// A row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub start_time: Timestamp,
    pub venue_id: DbId,
    pub artist_id: DbId,
}

/// DTO for creating a show.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateShow {
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
}

/// Show listing entry with venue and artist names resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}
