//! Handlers for shows. A show must name an existing venue and artist; the
//! store's foreign keys enforce that and the violation surfaces as 422.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trio_core::types::DbId;
use trio_db::models::show::{CreateShow, Show, ShowListing};
use trio_db::repositories::ShowRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ShowList {
    pub shows: Vec<ShowListing>,
}

#[derive(Debug, Serialize)]
pub struct ShowBody {
    pub show: Show,
}

#[derive(Debug, Serialize)]
pub struct ShowDeleted {
    pub deleted: DbId,
}

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> AppResult<Json<Success<ShowList>>> {
    let shows = ShowRepo::list(&state.pool).await?;
    Ok(Json(Success::new(ShowList { shows })))
}

/// POST /shows/create
pub async fn create_show(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateShow>,
) -> AppResult<Json<Success<ShowBody>>> {
    let show = ShowRepo::create(&state.pool, &input).await.map_err(|err| {
        tracing::warn!(
            error = %err,
            venue_id = input.venue_id,
            artist_id = input.artist_id,
            "Show could not be listed",
        );
        err
    })?;

    tracing::info!(
        show_id = show.id,
        venue_id = show.venue_id,
        artist_id = show.artist_id,
        "Show listed",
    );

    Ok(Json(Success::new(ShowBody { show })))
}

/// DELETE /shows/{id}/delete
pub async fn delete_show(
    State(state): State<AppState>,
    ApiPath(show_id): ApiPath<DbId>,
) -> AppResult<Json<Success<ShowDeleted>>> {
    if !ShowRepo::delete(&state.pool, show_id).await? {
        return Err(AppError::Unprocessable(format!(
            "Show with id {show_id} does not exist"
        )));
    }

    tracing::info!(show_id, "Show deleted");

    Ok(Json(Success::new(ShowDeleted { deleted: show_id })))
}
