use axum::{extract::State, Json};

use crate::db;
use crate::error::AppResult;
use crate::pricing::{PricingConfig, PricingUpdate};
use crate::AppState;

pub async fn get_settings(State(state): State<AppState>) -> Json<PricingConfig> {
    Json(*state.pricing.read().await)
}

/// Update pricing and persist it
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<PricingUpdate>,
) -> AppResult<Json<PricingConfig>> {
    let mut pricing = state.pricing.write().await;
    let next = pricing.apply(payload)?;

    db::settings::save_pricing(&state.db, &next).await?;
    *pricing = next;

    tracing::info!(
        base_fare = next.base_fare,
        price_per_km = next.price_per_km,
        average_speed_kmh = next.average_speed_kmh,
        "Settings saved"
    );

    Ok(Json(next))
}
