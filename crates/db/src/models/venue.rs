//! Venue entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trio_core::lenient;
use trio_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// DTO for creating a venue.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateVenue {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(max = 120))]
    pub city: Option<String>,
    #[validate(length(max = 120))]
    pub state: Option<String>,
    #[validate(length(max = 120))]
    pub address: Option<String>,
    #[validate(length(max = 120))]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,
    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,
    #[validate(url, length(max = 120))]
    pub website_link: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    #[validate(length(max = 500))]
    pub seeking_description: Option<String>,
}

/// DTO for a partial venue update. Omitted fields keep their stored value;
/// a nullable field sent as `null` or `""` is cleared.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateVenue {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::clearable_text")]
    #[validate(length(max = 120))]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::clearable_text")]
    #[validate(length(max = 120))]
    pub state: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::clearable_text")]
    #[validate(length(max = 120))]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::clearable_text")]
    #[validate(length(max = 120))]
    pub phone: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::clearable_text")]
    #[validate(url, length(max = 500))]
    pub image_link: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::clearable_text")]
    #[validate(url, length(max = 120))]
    pub facebook_link: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::clearable_text")]
    #[validate(url, length(max = 120))]
    pub website_link: Option<Option<String>>,
    pub seeking_talent: Option<bool>,
    #[serde(default, deserialize_with = "lenient::clearable_text")]
    #[validate(length(max = 500))]
    pub seeking_description: Option<Option<String>>,
}

/// Search result / area listing entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Area listing row before grouping.
#[derive(Debug, Clone, FromRow)]
pub struct VenueAreaRow {
    pub id: DbId,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub num_upcoming_shows: i64,
}

/// A show as seen from the venue page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// Venue page: the record plus its shows split around "now".
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
