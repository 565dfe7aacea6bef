use serde::Serialize;

use crate::error::RideError;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse latitude and longitude typed as decimal strings
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, RideError> {
        let (latitude, longitude) = (latitude.trim(), longitude.trim());
        if latitude.is_empty() || longitude.is_empty() {
            return Err(RideError::MissingInput);
        }

        let parse = |raw: &str| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    RideError::InvalidCoordinate(format!("'{}' is not a decimal number", raw))
                })
        };

        Ok(Self::new(parse(latitude)?, parse(longitude)?))
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Calculate distance between two coordinates using the Haversine formula
/// Returns distance in kilometers
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding near antipodes can push h just past 1
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Google Maps directions link between two points
pub fn directions_url(origin: Coordinate, destination: Coordinate) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={},{}&destination={},{}",
        origin.latitude, origin.longitude, destination.latitude, destination.longitude
    )
}
