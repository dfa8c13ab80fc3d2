//! Entities - per-request geocoding objects

mod geocoding_query;
mod geocoding_response;

pub use geocoding_query::{
    DEFAULT_LIMIT, DEFAULT_LOCALE, GeocodingMode, GeocodingParams, GeocodingQuery, MAX_LIMIT,
    MIN_LIMIT, QueryKind, clamp_limit,
};
pub use geocoding_response::{CanonicalEntry, CanonicalResponse, Extent};
