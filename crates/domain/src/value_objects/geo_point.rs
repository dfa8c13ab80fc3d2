//! Geographic point value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::QueryError;

/// A validated geographic point
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
/// NaN and infinite values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedPoint")]
pub struct GeoPoint {
    /// Latitude in degrees
    lat: f64,
    /// Longitude in degrees
    lon: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCoordinates;

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180"
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

#[derive(Deserialize)]
struct UncheckedPoint {
    lat: f64,
    lon: f64,
}

impl TryFrom<UncheckedPoint> for GeoPoint {
    type Error = InvalidCoordinates;

    fn try_from(raw: UncheckedPoint) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lon)
    }
}

impl GeoPoint {
    /// Create a new point with range validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinates);
        }
        Ok(Self { lat, lon })
    }

    /// Get the latitude
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Get the longitude
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Parses the `"<lat>,<lon>"` form used by the `point` request parameter
impl FromStr for GeoPoint {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Trailing empty tokens are ignored: "52.5,13.4," is a valid point.
        let tokens: Vec<&str> = s.split(',').collect();
        let end = tokens.iter().rposition(|t| !t.is_empty()).map_or(0, |i| i + 1);
        let [lat, lon] = tokens[..end] else {
            return Err(QueryError::InvalidPointFormat);
        };

        let parse = |token: &str| {
            token
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| QueryError::NonNumericCoordinates(s.to_string()))
        };

        Self::new(parse(lat)?, parse(lon)?).map_err(QueryError::from)
    }
}
