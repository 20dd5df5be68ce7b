//! Artist entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trio_core::lenient;
use trio_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// DTO for creating an artist.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateArtist {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(max = 120))]
    pub city: Option<String>,
    #[validate(length(max = 120))]
    pub state: Option<String>,
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
    pub seeking_venue: bool,
    #[validate(length(max = 500))]
    pub seeking_description: Option<String>,
}

/// DTO for a partial artist update. Omitted fields keep their stored value;
/// a nullable field sent as `null` or `""` is cleared.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateArtist {
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
    pub seeking_venue: Option<bool>,
    #[serde(default, deserialize_with = "lenient::clearable_text")]
    #[validate(length(max = 500))]
    pub seeking_description: Option<Option<String>>,
}

/// Search result entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// A show as seen from the artist page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistShow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// Artist page: the record plus its shows split around "now".
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Artist listing entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistListItem {
    pub id: DbId,
    pub name: String,
}
