use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{estimate, locations, settings};
use crate::middleware::rate_limit::create_public_governor;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let public_governor = create_public_governor();

    // Known places: list, look up, add/update
    let location_routes = Router::new()
        .route(
            "/",
            get(locations::list_locations).put(locations::upsert_location),
        )
        .route("/{name}", get(locations::get_location));

    let route_routes = Router::new().route("/estimate", post(estimate::estimate_route));

    // Pricing settings (base fare, price per km, average speed)
    let settings_routes = Router::new().route(
        "/",
        get(settings::get_settings).put(settings::update_settings),
    );

    Router::new()
        .nest("/api/locations", location_routes)
        .nest("/api/routes", route_routes)
        .nest("/api/settings", settings_routes)
        .layer(public_governor)
        .with_state(state)
}
