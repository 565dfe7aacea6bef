use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db;
use crate::error::{AppError, AppResult, RideError};
use crate::registry::normalize;
use crate::utils::geo::Coordinate;
use crate::AppState;

/// Add/update form: latitude and longitude arrive as typed decimal text
#[derive(Debug, Deserialize)]
pub struct UpsertLocationRequest {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub name: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

/// List known place names, sorted
pub async fn list_locations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.registry.read().await.list_names())
}

pub async fn get_location(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<LocationResponse>> {
    let coordinate = state
        .registry
        .read()
        .await
        .lookup(&name)
        .ok_or_else(|| AppError::NotFound(format!("Location '{}' not found", name)))?;

    Ok(Json(LocationResponse {
        name: normalize(&name),
        coordinate,
    }))
}

/// Add a new place or move an existing one
pub async fn upsert_location(
    State(state): State<AppState>,
    Json(payload): Json<UpsertLocationRequest>,
) -> AppResult<Json<LocationResponse>> {
    let name = normalize(&payload.name);
    if name.is_empty() {
        return Err(RideError::MissingInput.into());
    }
    let coordinate = Coordinate::parse(&payload.latitude, &payload.longitude)?;

    // Hold the write lock across the store so the registry and table agree
    let mut registry = state.registry.write().await;
    db::locations::save_location(&state.db, &name, coordinate).await?;
    registry.upsert(&name, coordinate)?;

    tracing::info!(
        name = %name,
        latitude = coordinate.latitude,
        longitude = coordinate.longitude,
        "Location added/updated"
    );

    Ok(Json(LocationResponse {
        name,
        coordinate,
    }))
}
