//! Handlers for the coffee-shop menu.
//!
//! The public listing shows each drink's short projection (colours and
//! proportions only). Everything else requires a bearer token carrying the
//! matching permission and answers with the long projection.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trio_core::error::CoreError;
use trio_core::types::DbId;
use trio_db::models::drink::{CreateDrink, Drink, DrinkLong, DrinkShort, UpdateDrink};
use trio_db::repositories::DrinkRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::permission::{
    DeleteDrinks, GetDrinksDetail, PatchDrinks, PostDrinks, RequirePermission,
};
use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DrinkList<T: Serialize> {
    pub drinks: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct DrinkDeleted {
    pub delete: DbId,
}

fn long_list(drinks: &[Drink]) -> Result<DrinkList<DrinkLong>, CoreError> {
    let drinks = drinks
        .iter()
        .map(Drink::long)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DrinkList { drinks })
}

/// GET /drinks
pub async fn list_drinks(
    State(state): State<AppState>,
) -> AppResult<Json<Success<DrinkList<DrinkShort>>>> {
    let drinks = DrinkRepo::list(&state.pool)
        .await?
        .iter()
        .map(Drink::short)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(Success::new(DrinkList { drinks })))
}

/// GET /drinks-detail
pub async fn list_drink_details(
    _auth: RequirePermission<GetDrinksDetail>,
    State(state): State<AppState>,
) -> AppResult<Json<Success<DrinkList<DrinkLong>>>> {
    let drinks = DrinkRepo::list(&state.pool).await?;
    Ok(Json(Success::new(long_list(&drinks)?)))
}

/// POST /drinks
pub async fn create_drink(
    auth: RequirePermission<PostDrinks>,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateDrink>,
) -> AppResult<Json<Success<DrinkList<DrinkLong>>>> {
    let new_drink = input.into_new_drink()?;

    let drink = DrinkRepo::create(&state.pool, &new_drink)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, title = %new_drink.title, "Drink could not be added");
            err
        })?;

    tracing::info!(drink_id = drink.id, sub = ?auth.claims.sub, "Drink added");

    Ok(Json(Success::new(long_list(&[drink])?)))
}

/// PATCH /drinks/{id}
pub async fn update_drink(
    auth: RequirePermission<PatchDrinks>,
    State(state): State<AppState>,
    ApiPath(drink_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateDrink>,
) -> AppResult<Json<Success<DrinkList<DrinkLong>>>> {
    let patch = input.into_patch()?;

    let drink = DrinkRepo::update(&state.pool, drink_id, &patch)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Drink",
            id: drink_id,
        })?;

    tracing::info!(drink_id, sub = ?auth.claims.sub, "Drink updated");

    Ok(Json(Success::new(long_list(&[drink])?)))
}

/// DELETE /drinks/{id}
pub async fn delete_drink(
    auth: RequirePermission<DeleteDrinks>,
    State(state): State<AppState>,
    ApiPath(drink_id): ApiPath<DbId>,
) -> AppResult<Json<Success<DrinkDeleted>>> {
    if !DrinkRepo::delete(&state.pool, drink_id).await? {
        return Err(AppError::Unprocessable(format!(
            "Drink with id {drink_id} does not exist"
        )));
    }

    tracing::info!(drink_id, sub = ?auth.claims.sub, "Drink deleted");

    Ok(Json(Success::new(DrinkDeleted { delete: drink_id })))
}
