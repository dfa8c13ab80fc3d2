//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Reasons a geocoding query is rejected before any upstream call
///
/// The display strings are returned verbatim to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Forward lookup without query text
    #[error("Query parameter 'q' is required for forward geocoding")]
    MissingQueryText,

    /// Reverse lookup without a point
    #[error("Point parameter is required for reverse geocoding")]
    MissingPoint,

    /// Point does not consist of exactly two comma-separated tokens
    #[error("Invalid point format. Expected: lat,lon")]
    InvalidPointFormat,

    /// One of the point tokens is not a number
    #[error("Invalid coordinates: {0}")]
    NonNumericCoordinates(String),

    /// Latitude or longitude outside the valid range
    #[error("Coordinates out of range. Lat: [-90, 90], Lon: [-180, 180]")]
    CoordinatesOutOfRange,
}

impl From<InvalidCoordinates> for QueryError {
    fn from(_: InvalidCoordinates) -> Self {
        Self::CoordinatesOutOfRange
    }
}
