//! Photon response translation
//!
//! Photon answers with a GeoJSON feature collection:
//!
//! ```json
//! {
//!   "features": [{
//!     "geometry": { "coordinates": [lon, lat] },
//!     "properties": {
//!       "name": "...", "country": "...", "city": "...", "state": "...",
//!       "street": "...", "housenumber": "...", "postcode": "...",
//!       "osm_id": 123, "osm_type": "N", "osm_key": "...", "osm_value": "...",
//!       "extent": [minLon, maxLat, maxLon, minLat]
//!     }
//!   }]
//! }
//! ```
//!
//! Only a body that is not JSON at all is an error. Shape problems inside
//! individual features cause that feature to be skipped.

use domain::{CanonicalEntry, CanonicalResponse, Extent, GeoPoint};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::GeocodingError;

/// Attributions attached to every Photon-backed response
pub const COPYRIGHTS: [&str; 2] = ["OpenStreetMap", "Photon"];

type Properties = Map<String, Value>;

/// Translate a Photon body into a canonical response with at most `limit` hits
///
/// # Errors
///
/// Returns `GeocodingError::ParseError` if `body` is not valid JSON.
pub fn translate(
    body: &str,
    limit: usize,
    locale: &str,
) -> Result<CanonicalResponse, GeocodingError> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

    let mut response = CanonicalResponse::new(locale, COPYRIGHTS);

    let Some(features) = root.get("features").and_then(Value::as_array) else {
        warn!("Invalid Photon response format: missing features array");
        return Ok(response);
    };

    response.entries = features
        .iter()
        .enumerate()
        .filter_map(|(index, feature)| {
            let entry = to_entry(feature);
            if entry.is_none() {
                debug!(index, "Skipping malformed Photon feature");
            }
            entry
        })
        .take(limit)
        .collect();

    Ok(response)
}

/// Map one feature, or `None` if it lacks usable geometry or properties
fn to_entry(feature: &Value) -> Option<CanonicalEntry> {
    let properties = feature.get("properties")?.as_object()?;
    let point = point_of(feature.get("geometry")?)?;

    Some(CanonicalEntry {
        point,
        name: text(properties, "name"),
        country: text(properties, "country"),
        city: text(properties, "city"),
        state: text(properties, "state"),
        street: text(properties, "street"),
        house_number: text(properties, "housenumber"),
        postcode: text(properties, "postcode"),
        osm_id: properties.get("osm_id").and_then(osm_id),
        osm_type: text(properties, "osm_type"),
        osm_key: text(properties, "osm_key"),
        osm_value: text(properties, "osm_value"),
        extent: properties.get("extent").and_then(extent),
    })
}

/// GeoJSON coordinates are `[lon, lat, ...]`
fn point_of(geometry: &Value) -> Option<GeoPoint> {
    let coordinates = geometry.get("coordinates")?.as_array()?;
    let [lon, lat, ..] = coordinates.as_slice() else {
        return None;
    };
    GeoPoint::new(lat.as_f64()?, lon.as_f64()?).ok()
}

/// Null-safe scalar lookup; strings are copied, numbers and booleans rendered
fn text(properties: &Properties, key: &str) -> Option<String> {
    match properties.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// OSM ids arrive as integers, occasionally as floats or strings
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn osm_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && (i64::MIN as f64..=i64::MAX as f64).contains(f))
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Exactly four numbers, kept in provider order
fn extent(value: &Value) -> Option<Extent> {
    let [a, b, c, d] = value.as_array()?.as_slice() else {
        return None;
    };
    Some([a.as_f64()?, b.as_f64()?, c.as_f64()?, d.as_f64()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(lon: f64, lat: f64, name: &str) -> Value {
        json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [lon, lat] },
            "properties": { "name": name }
        })
    }

    fn body(features: &[Value]) -> String {
        json!({ "type": "FeatureCollection", "features": features }).to_string()
    }

    fn names(response: &CanonicalResponse) -> Vec<&str> {
        response
            .entries
            .iter()
            .filter_map(|e| e.name.as_deref())
            .collect()
    }

    #[test]
    fn test_full_feature_maps_verbatim() {
        let body = json!({
            "features": [{
                "geometry": { "coordinates": [13.4, 52.5] },
                "properties": {
                    "name": "Brandenburger Tor",
                    "country": "Deutschland",
                    "city": "Berlin",
                    "state": "Berlin",
                    "street": "Pariser Platz",
                    "housenumber": "1",
                    "postcode": "10117",
                    "osm_id": 518_071_791,
                    "osm_type": "W",
                    "osm_key": "tourism",
                    "osm_value": "attraction",
                    "extent": [13.3772, 52.5164, 13.3783, 52.5161]
                }
            }]
        })
        .to_string();

        let response = translate(&body, 10, "de").unwrap();
        assert_eq!(response.locale, "de");
        assert_eq!(response.copyrights, vec!["OpenStreetMap", "Photon"]);
        assert_eq!(response.len(), 1);

        let entry = &response.entries[0];
        assert_eq!(entry.point, GeoPoint::new(52.5, 13.4).unwrap());
        assert_eq!(entry.name.as_deref(), Some("Brandenburger Tor"));
        assert_eq!(entry.country.as_deref(), Some("Deutschland"));
        assert_eq!(entry.city.as_deref(), Some("Berlin"));
        assert_eq!(entry.state.as_deref(), Some("Berlin"));
        assert_eq!(entry.street.as_deref(), Some("Pariser Platz"));
        assert_eq!(entry.house_number.as_deref(), Some("1"));
        assert_eq!(entry.postcode.as_deref(), Some("10117"));
        assert_eq!(entry.osm_id, Some(518_071_791));
        assert_eq!(entry.osm_type.as_deref(), Some("W"));
        assert_eq!(entry.osm_key.as_deref(), Some("tourism"));
        assert_eq!(entry.osm_value.as_deref(), Some("attraction"));
        assert_eq!(entry.extent, Some([13.3772, 52.5164, 13.3783, 52.5161]));
    }

    #[test]
    fn test_limit_keeps_first_entries_in_order() {
        let features: Vec<Value> = (1..=5)
            .map(|i| feature(13.0 + f64::from(i), 52.0, &format!("hit-{i}")))
            .collect();

        let response = translate(&body(&features), 3, "en").unwrap();
        assert_eq!(names(&response), vec!["hit-1", "hit-2", "hit-3"]);
    }

    #[test]
    fn test_missing_city_is_absent() {
        let response = translate(&body(&[feature(13.4, 52.5, "Somewhere")]), 10, "en").unwrap();
        assert_eq!(response.len(), 1);
        assert!(response.entries[0].city.is_none());
    }

    #[test]
    fn test_null_fields_are_absent_not_empty() {
        let body = json!({
            "features": [{
                "geometry": { "coordinates": [13.4, 52.5] },
                "properties": { "name": null, "city": null, "osm_id": null, "extent": null }
            }]
        })
        .to_string();

        let entry = &translate(&body, 10, "en").unwrap().entries[0];
        assert!(entry.name.is_none());
        assert!(entry.city.is_none());
        assert!(entry.osm_id.is_none());
        assert!(entry.extent.is_none());
    }

    #[test]
    fn test_missing_features_is_empty_response() {
        let response = translate(r#"{"type": "FeatureCollection"}"#, 10, "fr").unwrap();
        assert!(response.is_empty());
        assert_eq!(response.locale, "fr");
        assert_eq!(response.copyrights, vec!["OpenStreetMap", "Photon"]);
    }

    #[test]
    fn test_non_array_features_is_empty_response() {
        let response = translate(r#"{"features": {"oops": true}}"#, 10, "en").unwrap();
        assert!(response.is_empty());

        let response = translate("[]", 10, "en").unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = translate("<html>Bad Gateway</html>", 10, "en");
        assert!(matches!(result, Err(GeocodingError::ParseError(_))));

        let result = translate(r#"{"features": ["#, 10, "en");
        assert!(matches!(result, Err(GeocodingError::ParseError(_))));
    }

    #[test]
    fn test_malformed_features_are_skipped_and_not_counted() {
        let features = vec![
            json!({ "properties": { "name": "no geometry" } }),
            json!({ "geometry": { "coordinates": [1.0, 2.0] } }),
            json!({ "geometry": {}, "properties": { "name": "no coordinates" } }),
            json!({ "geometry": { "coordinates": [1.0] }, "properties": { "name": "short" } }),
            json!({ "geometry": { "coordinates": ["a", "b"] }, "properties": {} }),
            json!({ "geometry": { "coordinates": [1.0, 95.0] }, "properties": {} }),
            feature(13.4, 52.5, "first"),
            feature(2.35, 48.85, "second"),
        ];

        let response = translate(&body(&features), 2, "en").unwrap();
        assert_eq!(names(&response), vec!["first", "second"]);
    }

    #[test]
    fn test_three_dimensional_coordinates_accepted() {
        let body = json!({
            "features": [{
                "geometry": { "coordinates": [13.4, 52.5, 34.0] },
                "properties": {}
            }]
        })
        .to_string();

        let response = translate(&body, 10, "en").unwrap();
        assert_eq!(response.entries[0].point, GeoPoint::new(52.5, 13.4).unwrap());
    }

    #[test]
    fn test_osm_id_representations() {
        assert_eq!(osm_id(&json!(42)), Some(42));
        assert_eq!(osm_id(&json!(-7)), Some(-7));
        assert_eq!(osm_id(&json!(42.0)), Some(42));
        assert_eq!(osm_id(&json!("1234567890123")), Some(1_234_567_890_123));
        assert_eq!(osm_id(&json!(" 99 ")), Some(99));
        assert_eq!(osm_id(&json!("abc")), None);
        assert_eq!(osm_id(&json!(true)), None);
        assert_eq!(osm_id(&json!(1e300)), None);
    }

    #[test]
    fn test_numeric_scalars_rendered_as_text() {
        let body = json!({
            "features": [{
                "geometry": { "coordinates": [13.4, 52.5] },
                "properties": { "postcode": 10117, "housenumber": { "nested": 1 } }
            }]
        })
        .to_string();

        let entry = &translate(&body, 10, "en").unwrap().entries[0];
        assert_eq!(entry.postcode.as_deref(), Some("10117"));
        assert!(entry.house_number.is_none());
    }

    #[test]
    fn test_extent_requires_four_numbers() {
        assert_eq!(extent(&json!([1.0, 2.0, 3.0, 4.0])), Some([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(extent(&json!([1, 2, 3, 4])), Some([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(extent(&json!([1.0, 2.0, 3.0])), None);
        assert_eq!(extent(&json!([1.0, 2.0, 3.0, 4.0, 5.0])), None);
        assert_eq!(extent(&json!([1.0, "2", 3.0, 4.0])), None);
        assert_eq!(extent(&json!("1,2,3,4")), None);
    }
}
