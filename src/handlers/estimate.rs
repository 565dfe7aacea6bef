use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::route::{ResolvedRoute, RouteQueryService, RouteRequest};
use crate::AppState;

/// Estimate distance, time and fare between two known places
pub async fn estimate_route(
    State(state): State<AppState>,
    Json(payload): Json<RouteRequest>,
) -> AppResult<Json<ResolvedRoute>> {
    let pricing = *state.pricing.read().await;
    let registry = state.registry.read().await;

    let resolved = RouteQueryService::new(&registry, pricing).estimate(&payload)?;
    Ok(Json(resolved))
}
