use std::collections::BTreeMap;

use crate::error::RideError;
use crate::utils::geo::Coordinate;

/// Canonical form of a place name: trimmed, lowercased, single-spaced.
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Known places keyed by normalized name
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    locations: BTreeMap<String, Coordinate>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite a place, returning the normalized key it was saved under
    pub fn upsert(&mut self, name: &str, coordinate: Coordinate) -> Result<String, RideError> {
        let key = normalize(name);
        if key.is_empty() {
            return Err(RideError::MissingInput);
        }
        if !coordinate.is_finite() {
            return Err(RideError::InvalidCoordinate(format!(
                "{}, {} is not a finite position",
                coordinate.latitude, coordinate.longitude
            )));
        }

        self.locations.insert(key.clone(), coordinate);
        Ok(key)
    }

    pub fn lookup(&self, name: &str) -> Option<Coordinate> {
        self.locations.get(&normalize(name)).copied()
    }

    /// Registered names in lexicographic order
    pub fn list_names(&self) -> Vec<String> {
        self.locations.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Red   Light "), "red light");
        assert_eq!(normalize("BROAD\tStreet\n"), "broad street");
        assert_eq!(normalize("elua"), "elua");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_lookup_any_variant() {
        let mut registry = LocationRegistry::new();
        let stored = Coordinate::new(6.3029, -10.7868);
        let key = registry.upsert("Mamba  Point", stored).unwrap();

        assert_eq!(key, "mamba point");
        assert_eq!(registry.lookup("mamba point"), Some(stored));
        assert_eq!(registry.lookup("  MAMBA\t point "), Some(stored));
        assert_eq!(registry.lookup("mamba"), None);
    }

    #[test]
    fn test_upsert_overwrites() {
        let mut registry = LocationRegistry::new();
        registry.upsert("sinkor", Coordinate::new(6.0, -10.0)).unwrap();
        registry.upsert("Sinkor", Coordinate::new(6.2826, -10.7757)).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("sinkor"), Some(Coordinate::new(6.2826, -10.7757)));
    }

    #[test]
    fn test_upsert_rejects_blank_name_and_non_finite() {
        let mut registry = LocationRegistry::new();
        assert_eq!(
            registry.upsert("  ", Coordinate::new(6.0, -10.0)),
            Err(RideError::MissingInput)
        );
        assert!(matches!(
            registry.upsert("duala", Coordinate::new(f64::NAN, -10.0)),
            Err(RideError::InvalidCoordinate(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_out_of_range_is_accepted() {
        let mut registry = LocationRegistry::new();
        assert!(registry.upsert("nowhere", Coordinate::new(120.0, 400.0)).is_ok());
    }

    #[test]
    fn test_list_names_sorted() {
        let mut registry = LocationRegistry::new();
        for name in ["water side", "Duala", "broad street"] {
            registry.upsert(name, Coordinate::new(6.3, -10.8)).unwrap();
        }
        assert_eq!(registry.list_names(), vec!["broad street", "duala", "water side"]);
    }
}
