use serde::{Deserialize, Serialize};

use crate::error::RideError;

pub const DEFAULT_BASE_FARE: f64 = 100.0;
pub const DEFAULT_PRICE_PER_KM: f64 = 45.0;
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 25.0;

/// Storage keys for the persisted settings
pub const BASE_FARE_KEY: &str = "baseFare";
pub const PRICE_PER_KM_KEY: &str = "pricePerKm";
pub const AVERAGE_SPEED_KEY: &str = "averageSpeedKmh";

/// Tunable parameters for fare and travel time (amounts in LD$)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub base_fare: f64,
    pub price_per_km: f64,
    pub average_speed_kmh: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_fare: DEFAULT_BASE_FARE,
            price_per_km: DEFAULT_PRICE_PER_KM,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}

/// Partial settings change. Omitted or zero fields keep the current value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PricingUpdate {
    pub base_fare: Option<f64>,
    pub price_per_km: Option<f64>,
    pub average_speed_kmh: Option<f64>,
}

impl PricingConfig {
    /// Build from stored key-value settings.
    ///
    /// Each value falls back to its default when missing, non-numeric, non-finite,
    /// zero or negative. This never fails.
    pub fn from_stored<'a>(get: impl Fn(&str) -> Option<&'a str>) -> Self {
        let read = |key: &str, default: f64| match get(key) {
            None => default,
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => v,
                _ => {
                    tracing::warn!(key, value = raw, default, "Ignoring invalid stored setting");
                    default
                }
            },
        };

        Self {
            base_fare: read(BASE_FARE_KEY, DEFAULT_BASE_FARE),
            price_per_km: read(PRICE_PER_KM_KEY, DEFAULT_PRICE_PER_KM),
            average_speed_kmh: read(AVERAGE_SPEED_KEY, DEFAULT_AVERAGE_SPEED_KMH),
        }
    }

    /// Key-value pairs to write back to storage
    pub fn to_stored(&self) -> [(&'static str, String); 3] {
        [
            (BASE_FARE_KEY, self.base_fare.to_string()),
            (PRICE_PER_KM_KEY, self.price_per_km.to_string()),
            (AVERAGE_SPEED_KEY, self.average_speed_kmh.to_string()),
        ]
    }

    pub fn validate(&self) -> Result<(), RideError> {
        if !(self.base_fare.is_finite() && self.base_fare >= 0.0) {
            return Err(RideError::InvalidConfig(format!(
                "base fare must be non-negative, got {}",
                self.base_fare
            )));
        }
        if !(self.price_per_km.is_finite() && self.price_per_km >= 0.0) {
            return Err(RideError::InvalidConfig(format!(
                "price per km must be non-negative, got {}",
                self.price_per_km
            )));
        }
        if !(self.average_speed_kmh.is_finite() && self.average_speed_kmh > 0.0) {
            return Err(RideError::InvalidConfig(format!(
                "average speed must be positive, got {}",
                self.average_speed_kmh
            )));
        }
        Ok(())
    }

    /// Apply a settings change, returning the new configuration
    pub fn apply(&self, update: PricingUpdate) -> Result<Self, RideError> {
        let pick = |new: Option<f64>, current: f64| match new {
            Some(v) if v != 0.0 => v,
            _ => current,
        };

        let next = Self {
            base_fare: pick(update.base_fare, self.base_fare),
            price_per_km: pick(update.price_per_km, self.price_per_km),
            average_speed_kmh: pick(update.average_speed_kmh, self.average_speed_kmh),
        };
        next.validate()?;
        Ok(next)
    }
}

/// `base + per_km * distance`, rounded half away from zero to whole LD$
pub fn fare(distance_km: f64, config: &PricingConfig) -> i64 {
    (config.base_fare + config.price_per_km * distance_km).round() as i64
}

/// Travel time in whole minutes at the configured average speed, never below 1
pub fn estimated_minutes(distance_km: f64, config: &PricingConfig) -> Result<i64, RideError> {
    let speed = config.average_speed_kmh;
    if !(speed.is_finite() && speed > 0.0) {
        return Err(RideError::InvalidConfig(format!(
            "average speed must be positive, got {}",
            speed
        )));
    }

    let minutes = (distance_km / speed * 60.0).round() as i64;
    Ok(minutes.max(1))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn stored(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_fare_reference_value() {
        let config = PricingConfig::default();
        // 100 + 45 * 4.57 = 305.65
        assert_eq!(fare(4.57, &config), 306);
        assert_eq!(fare(0.0, &config), 100);
    }

    #[test]
    fn test_fare_rounds_half_away_from_zero() {
        let config = PricingConfig {
            base_fare: 100.5,
            price_per_km: 0.0,
            average_speed_kmh: 25.0,
        };
        assert_eq!(fare(10.0, &config), 101);
    }

    #[test]
    fn test_fare_is_monotonic() {
        let config = PricingConfig::default();
        let mut previous = fare(0.0, &config);
        for step in 1..500 {
            let current = fare(step as f64 * 0.037, &config);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_minutes_floor_of_one() {
        let config = PricingConfig::default();
        assert_eq!(estimated_minutes(0.0, &config), Ok(1));
        assert_eq!(estimated_minutes(0.001, &config), Ok(1));
        // 4.57 km at 25 km/h is 10.968 minutes
        assert_eq!(estimated_minutes(4.57, &config), Ok(11));
        for km in [0.0, 0.1, 1.0, 12.5, 800.0] {
            assert!(estimated_minutes(km, &config).unwrap() >= 1);
        }
    }

    #[test]
    fn test_minutes_rejects_non_positive_speed() {
        for speed in [0.0, -5.0, f64::NAN] {
            let config = PricingConfig {
                average_speed_kmh: speed,
                ..PricingConfig::default()
            };
            assert!(matches!(
                estimated_minutes(3.0, &config),
                Err(RideError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_from_stored_defaults() {
        let empty = HashMap::<String, String>::new();
        let config = PricingConfig::from_stored(|k| empty.get(k).map(String::as_str));
        assert_eq!(config, PricingConfig::default());

        let junk = stored(&[
            (BASE_FARE_KEY, "abc"),
            (PRICE_PER_KM_KEY, "0"),
            (AVERAGE_SPEED_KEY, "-3"),
        ]);
        let config = PricingConfig::from_stored(|k| junk.get(k).map(String::as_str));
        assert_eq!(config.base_fare, 100.0);
        assert_eq!(config.price_per_km, 45.0);
        assert_eq!(config.average_speed_kmh, 25.0);
    }

    #[test]
    fn test_from_stored_round_trip() {
        let config = PricingConfig {
            base_fare: 150.0,
            price_per_km: 52.5,
            average_speed_kmh: 18.0,
        };
        let map: HashMap<String, String> = config
            .to_stored()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        assert_eq!(PricingConfig::from_stored(|k| map.get(k).map(String::as_str)), config);
    }

    #[test]
    fn test_apply_keeps_current_for_missing_or_zero() {
        let current = PricingConfig::default();
        let next = current
            .apply(PricingUpdate {
                base_fare: Some(0.0),
                price_per_km: Some(60.0),
                average_speed_kmh: None,
            })
            .unwrap();

        assert_eq!(next.base_fare, 100.0);
        assert_eq!(next.price_per_km, 60.0);
        assert_eq!(next.average_speed_kmh, 25.0);
    }

    #[test]
    fn test_apply_rejects_negative() {
        let current = PricingConfig::default();
        let result = current.apply(PricingUpdate {
            average_speed_kmh: Some(-10.0),
            ..PricingUpdate::default()
        });
        assert!(matches!(result, Err(RideError::InvalidConfig(_))));
    }
}
