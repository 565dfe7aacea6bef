//! Route estimation between two registered places.
//!
//! A query moves from validation to either a [`ResolvedRoute`] or a
//! [`RideError`]. Nothing is retried; every call starts from scratch.

use serde::{Deserialize, Serialize};

use crate::error::RideError;
use crate::pricing::{estimated_minutes, fare, PricingConfig};
use crate::registry::{normalize, LocationRegistry};
use crate::utils::geo::{directions_url, distance_km};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub from_name: String,
    pub to_name: String,
    pub distance_km: f64,
    pub estimated_minutes: i64,
    pub fare: i64,
    pub payment_method: String,
    pub average_speed_kmh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRoute {
    #[serde(flatten)]
    pub route: RouteResult,
    pub maps_url: String,
}

/// Runs route queries against a registry and a pricing snapshot
#[derive(Debug, Clone, Copy)]
pub struct RouteQueryService<'a> {
    registry: &'a LocationRegistry,
    pricing: PricingConfig,
}

impl<'a> RouteQueryService<'a> {
    pub fn new(registry: &'a LocationRegistry, pricing: PricingConfig) -> Self {
        Self { registry, pricing }
    }

    pub fn estimate(&self, request: &RouteRequest) -> Result<ResolvedRoute, RideError> {
        let (from_raw, to_raw) = (request.from.trim(), request.to.trim());
        if from_raw.is_empty() || to_raw.is_empty() {
            return Err(RideError::MissingInput);
        }

        let from_name = normalize(from_raw);
        let to_name = normalize(to_raw);
        if from_name == to_name {
            return Err(RideError::SameLocation);
        }

        let origin = self.registry.lookup(&from_name);
        let destination = self.registry.lookup(&to_name);
        let (origin, destination) = match (origin, destination) {
            (Some(o), Some(d)) => (o, d),
            (o, d) => {
                let mut missing = Vec::new();
                if o.is_none() {
                    missing.push(from_raw.to_string());
                }
                if d.is_none() {
                    missing.push(to_raw.to_string());
                }
                tracing::debug!(?missing, "Route query with unknown locations");
                return Err(RideError::UnknownLocation(missing));
            }
        };

        let payment_method = request
            .payment_method
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(RideError::MissingPaymentMethod)?;

        let distance = distance_km(origin, destination);
        let minutes = estimated_minutes(distance, &self.pricing)?;
        let fare = fare(distance, &self.pricing);

        tracing::debug!(
            from = %from_name,
            to = %to_name,
            distance_km = distance,
            minutes,
            fare,
            "Route estimated"
        );

        Ok(ResolvedRoute {
            route: RouteResult {
                from_name,
                to_name,
                distance_km: distance,
                estimated_minutes: minutes,
                fare,
                payment_method: payment_method.to_string(),
                average_speed_kmh: self.pricing.average_speed_kmh,
            },
            maps_url: directions_url(origin, destination),
        })
    }
}
