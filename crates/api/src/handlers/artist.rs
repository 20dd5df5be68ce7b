use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trio_core::error::CoreError;
use trio_core::search::contains_pattern;
use trio_core::types::DbId;
use trio_core::validation::{require_text, require_text_if_present, validate_input};
use trio_db::models::artist::{
    Artist, ArtistDetail, ArtistListItem, ArtistSummary, CreateArtist, UpdateArtist,
};
use trio_db::repositories::ArtistRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::query::SearchTermBody;
use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ArtistList {
    pub artists: Vec<ArtistListItem>,
}

#[derive(Debug, Serialize)]
pub struct ArtistSearchResults {
    pub count: usize,
    pub data: Vec<ArtistSummary>,
}

#[derive(Debug, Serialize)]
pub struct ArtistBody<T: Serialize> {
    pub artist: T,
}

#[derive(Debug, Serialize)]
pub struct ArtistDeleted {
    pub deleted: DbId,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Artist", id })
}

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> AppResult<Json<Success<ArtistList>>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Json(Success::new(ArtistList { artists })))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SearchTermBody>,
) -> AppResult<Json<Success<ArtistSearchResults>>> {
    let data = ArtistRepo::search(&state.pool, &contains_pattern(&body.search_term)).await?;

    Ok(Json(Success::new(ArtistSearchResults {
        count: data.len(),
        data,
    })))
}

/// GET /artists/{id}
pub async fn get_artist(
    State(state): State<AppState>,
    ApiPath(artist_id): ApiPath<DbId>,
) -> AppResult<Json<Success<ArtistBody<ArtistDetail>>>> {
    let artist = ArtistRepo::find_detail(&state.pool, artist_id)
        .await?
        .ok_or_else(|| not_found(artist_id))?;

    Ok(Json(Success::new(ArtistBody { artist })))
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateArtist>,
) -> AppResult<Json<Success<ArtistBody<Artist>>>> {
    validate_input(&input)?;
    require_text("name", &input.name)?;

    let artist = ArtistRepo::create(&state.pool, &input).await.map_err(|err| {
        tracing::warn!(error = %err, name = %input.name, "Artist could not be listed");
        err
    })?;

    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");

    Ok(Json(Success::new(ArtistBody { artist })))
}

/// GET /artists/{id}/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    ApiPath(artist_id): ApiPath<DbId>,
) -> AppResult<Json<Success<ArtistBody<Artist>>>> {
    let artist = ArtistRepo::find_by_id(&state.pool, artist_id)
        .await?
        .ok_or_else(|| not_found(artist_id))?;

    Ok(Json(Success::new(ArtistBody { artist })))
}

/// POST /artists/{id}/edit
pub async fn update_artist(
    State(state): State<AppState>,
    ApiPath(artist_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateArtist>,
) -> AppResult<Json<Success<ArtistBody<Artist>>>> {
    validate_input(&input)?;
    require_text_if_present("name", input.name.as_deref())?;

    let artist = ArtistRepo::update(&state.pool, artist_id, &input)
        .await?
        .ok_or_else(|| not_found(artist_id))?;

    tracing::info!(artist_id, "Artist updated");

    Ok(Json(Success::new(ArtistBody { artist })))
}

/// DELETE /artists/{id}/delete
pub async fn delete_artist(
    State(state): State<AppState>,
    ApiPath(artist_id): ApiPath<DbId>,
) -> AppResult<Json<Success<ArtistDeleted>>> {
    if !ArtistRepo::delete(&state.pool, artist_id).await? {
        return Err(AppError::Unprocessable(format!(
            "Artist with id {artist_id} does not exist"
        )));
    }

    tracing::info!(artist_id, "Artist deleted");

    Ok(Json(Success::new(ArtistDeleted { deleted: artist_id })))
}
