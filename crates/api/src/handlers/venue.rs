//! Handlers for venues.
//!
//! Venue listings are grouped by city and state; details split the venue's
//! shows into past and upcoming relative to the request time.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trio_core::booking::{group_by_area, Area};
use trio_core::error::CoreError;
use trio_core::search::contains_pattern;
use trio_core::types::DbId;
use trio_core::validation::{require_text, require_text_if_present, validate_input};
use trio_db::models::venue::{CreateVenue, UpdateVenue, Venue, VenueDetail, VenueSummary};
use trio_db::repositories::VenueRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::query::SearchTermBody;
use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VenueAreas {
    pub areas: Vec<Area<VenueSummary>>,
}

#[derive(Debug, Serialize)]
pub struct VenueSearchResults {
    pub count: usize,
    pub data: Vec<VenueSummary>,
}

#[derive(Debug, Serialize)]
pub struct VenueBody<T: Serialize> {
    pub venue: T,
}

#[derive(Debug, Serialize)]
pub struct VenueDeleted {
    pub deleted: DbId,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Venue", id })
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> AppResult<Json<Success<VenueAreas>>> {
    let rows = VenueRepo::list_area_rows(&state.pool).await?;
    let areas = group_by_area(rows.into_iter().map(|row| {
        (
            row.city,
            row.state,
            VenueSummary {
                id: row.id,
                name: row.name,
                num_upcoming_shows: row.num_upcoming_shows,
            },
        )
    }));

    Ok(Json(Success::new(VenueAreas { areas })))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SearchTermBody>,
) -> AppResult<Json<Success<VenueSearchResults>>> {
    let data = VenueRepo::search(&state.pool, &contains_pattern(&body.search_term)).await?;

    Ok(Json(Success::new(VenueSearchResults {
        count: data.len(),
        data,
    })))
}

/// GET /venues/{id}
pub async fn get_venue(
    State(state): State<AppState>,
    ApiPath(venue_id): ApiPath<DbId>,
) -> AppResult<Json<Success<VenueBody<VenueDetail>>>> {
    let venue = VenueRepo::find_detail(&state.pool, venue_id)
        .await?
        .ok_or_else(|| not_found(venue_id))?;

    Ok(Json(Success::new(VenueBody { venue })))
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateVenue>,
) -> AppResult<Json<Success<VenueBody<Venue>>>> {
    validate_input(&input)?;
    require_text("name", &input.name)?;

    let venue = VenueRepo::create(&state.pool, &input).await.map_err(|err| {
        tracing::warn!(error = %err, name = %input.name, "Venue could not be listed");
        err
    })?;

    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");

    Ok(Json(Success::new(VenueBody { venue })))
}

/// GET /venues/{id}/edit
///
/// Current values, for pre-filling an edit form.
pub async fn edit_venue_form(
    State(state): State<AppState>,
    ApiPath(venue_id): ApiPath<DbId>,
) -> AppResult<Json<Success<VenueBody<Venue>>>> {
    let venue = VenueRepo::find_by_id(&state.pool, venue_id)
        .await?
        .ok_or_else(|| not_found(venue_id))?;

    Ok(Json(Success::new(VenueBody { venue })))
}

/// POST /venues/{id}/edit
pub async fn update_venue(
    State(state): State<AppState>,
    ApiPath(venue_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateVenue>,
) -> AppResult<Json<Success<VenueBody<Venue>>>> {
    validate_input(&input)?;
    require_text_if_present("name", input.name.as_deref())?;

    let venue = VenueRepo::update(&state.pool, venue_id, &input)
        .await?
        .ok_or_else(|| not_found(venue_id))?;

    tracing::info!(venue_id, "Venue updated");

    Ok(Json(Success::new(VenueBody { venue })))
}

/// DELETE /venues/{id}/delete
///
/// The venue's shows go with it.
pub async fn delete_venue(
    State(state): State<AppState>,
    ApiPath(venue_id): ApiPath<DbId>,
) -> AppResult<Json<Success<VenueDeleted>>> {
    if !VenueRepo::delete(&state.pool, venue_id).await? {
        return Err(AppError::Unprocessable(format!(
            "Venue with id {venue_id} does not exist"
        )));
    }

    tracing::info!(venue_id, "Venue deleted");

    Ok(Json(Success::new(VenueDeleted { deleted: venue_id })))
}
