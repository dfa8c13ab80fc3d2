//! Canonical, provider-independent geocoding results

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoPoint;

/// Bounding box in provider order: `[min_lon, max_lat, max_lon, min_lat]`
pub type Extent = [f64; 4];

/// A single geocoding hit
///
/// Every descriptive field is optional. A field the provider did not send
/// stays `None` and is omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalEntry {
    /// Location of the hit
    pub point: GeoPoint,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(
        rename = "housenumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub house_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,

    /// OpenStreetMap object id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<i64>,

    /// OpenStreetMap object type (`N`, `W`, `R`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_type: Option<String>,

    /// OpenStreetMap tag key, e.g. `place`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_key: Option<String>,

    /// OpenStreetMap tag value, e.g. `city`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_value: Option<String>,

    /// Spatial footprint of the hit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent: Option<Extent>,
}

impl CanonicalEntry {
    /// Create an entry at `point` with every other field absent
    #[must_use]
    pub const fn at(point: GeoPoint) -> Self {
        Self {
            point,
            name: None,
            country: None,
            city: None,
            state: None,
            street: None,
            house_number: None,
            postcode: None,
            osm_id: None,
            osm_type: None,
            osm_key: None,
            osm_value: None,
            extent: None,
        }
    }
}

/// The full result of one geocoding lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalResponse {
    /// Locale the results were requested in
    pub locale: String,

    /// Attributions for the data source, in display order
    pub copyrights: Vec<String>,

    /// Hits in provider order
    #[serde(rename = "hits")]
    pub entries: Vec<CanonicalEntry>,
}

impl CanonicalResponse {
    /// Create an empty response
    pub fn new<I, S>(locale: impl Into<String>, copyrights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locale: locale.into(),
            copyrights: copyrights.into_iter().map(Into::into).collect(),
            entries: Vec::new(),
        }
    }

    /// Number of hits
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no hits
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
