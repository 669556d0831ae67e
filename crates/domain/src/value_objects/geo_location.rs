//! Geographic location value object

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// A geographic location with latitude and longitude
///
/// Immutable once constructed; construction validates the coordinate ranges
/// so an out-of-range location can never exist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]. Boundaries are inclusive.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::validation(format!(
                "invalid latitude {latitude}: must be between -90 and 90"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::validation(format!(
                "invalid longitude {longitude}: must be between -180 and 180"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid coordinates");
        assert!((loc.latitude() - 52.52).abs() < f64::EPSILON);
        assert!((loc.longitude() - 13.405).abs() < f64::EPSILON);
    }

    #[test]
    fn boundary_coordinates_are_inclusive() {
        assert!(GeoLocation::new(90.0, 0.0).is_ok());
        assert!(GeoLocation::new(-90.0, 0.0).is_ok());
        assert!(GeoLocation::new(0.0, 180.0).is_ok());
        assert!(GeoLocation::new(0.0, -180.0).is_ok());
    }

    #[test]
    fn invalid_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-90.001, 0.0).is_err());
    }

    #[test]
    fn invalid_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -180.5).is_err());
    }

    #[test]
    fn validation_failure_is_validation_error() {
        let err = GeoLocation::new(91.0, 0.0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn display_contains_coordinates() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid");
        let display = format!("{loc}");
        assert!(display.contains("52.52"));
        assert!(display.contains("13.40"));
    }

    #[test]
    fn serializes_to_json() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        assert!(json.contains("latitude"));
        assert!(json.contains("longitude"));
    }
}
