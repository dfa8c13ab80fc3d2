//! Upstream URL construction for Photon
//!
//! Forward search lives under the configured base (`.../api`), reverse
//! search at the site root (`.../reverse`).

use domain::{GeocodingQuery, QueryKind};
use url::form_urlencoded;

/// Build the provider URL for a validated query
#[must_use]
pub fn build_url(base_url: &str, query: &GeocodingQuery) -> String {
    match query.kind() {
        QueryKind::Forward { text } => format!(
            "{base_url}/?q={}&limit={}&lang={}",
            encode(text),
            query.limit(),
            query.locale()
        ),
        QueryKind::Reverse { point } => format!(
            "{}/reverse?lat={}&lon={}&limit={}&lang={}",
            reverse_base(base_url),
            point.lat(),
            point.lon(),
            query.limit(),
            query.locale()
        ),
    }
}

/// Strip a trailing `/api` or `/api/` from the configured base
fn reverse_base(base_url: &str) -> &str {
    base_url
        .strip_suffix("/api")
        .or_else(|| base_url.strip_suffix("/api/"))
        .unwrap_or(base_url)
}

/// UTF-8 form encoding (space becomes `+`)
fn encode(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}
