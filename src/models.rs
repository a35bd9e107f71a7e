//! Data model for geocoding results and daily weather records

use serde::Serialize;

/// Outcome of a geocoding lookup
///
/// Coordinates and country exist only on the success variant, so the
/// "fields present iff found" invariant holds by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoResult {
    /// First candidate returned by the geocoding provider, in provider order
    Found {
        /// Latitude in decimal degrees
        latitude: f64,
        /// Longitude in decimal degrees
        longitude: f64,
        /// Country name of the candidate
        country: String,
    },
    /// The provider had no candidates, or the lookup failed
    NotFound,
}

impl GeoResult {
    /// Whether the lookup produced a usable candidate
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// One day's weather summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    /// ISO calendar date as returned by the provider
    pub date: String,
    /// Daily maximum temperature in Celsius
    pub temp_day: f64,
    /// Daily minimum temperature in Celsius
    pub temp_night: f64,
    /// Daily mean relative humidity in percent
    pub humidity: f64,
}

/// Chronological list of day records, in provider order (never re-sorted)
pub type WeatherSeries = Vec<DayRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_result_is_found() {
        let found = GeoResult::Found {
            latitude: 48.8566,
            longitude: 2.3522,
            country: "France".to_string(),
        };
        assert!(found.is_found());
        assert!(!GeoResult::NotFound.is_found());
    }
}
