//! Geocoding query entity and request parameter validation

use serde::{Deserialize, Serialize};

use crate::errors::QueryError;
use crate::value_objects::GeoPoint;

/// Result limit applied when the caller does not provide one
pub const DEFAULT_LIMIT: i64 = 10;

/// Smallest accepted result limit
pub const MIN_LIMIT: u32 = 1;

/// Largest accepted result limit; larger values are capped
pub const MAX_LIMIT: u32 = 50;

/// Locale applied when the caller does not provide one
pub const DEFAULT_LOCALE: &str = "en";

const fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// Raw inbound request parameters, as parsed from the query string
///
/// Nothing is validated here; see [`GeocodingQuery::from_params`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodingParams {
    /// Free-text query (forward mode)
    #[serde(default)]
    pub q: Option<String>,

    /// Whether this is a reverse lookup
    #[serde(default)]
    pub reverse: bool,

    /// `"lat,lon"` (reverse mode)
    #[serde(default)]
    pub point: Option<String>,

    /// Requested number of results, clamped during validation
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Result language
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for GeocodingParams {
    fn default() -> Self {
        Self {
            q: None,
            reverse: false,
            point: None,
            limit: DEFAULT_LIMIT,
            locale: default_locale(),
        }
    }
}

impl GeocodingParams {
    /// Parameters for a forward lookup
    #[must_use]
    pub fn forward(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Default::default()
        }
    }

    /// Parameters for a reverse lookup
    #[must_use]
    pub fn reverse(point: impl Into<String>) -> Self {
        Self {
            reverse: true,
            point: Some(point.into()),
            ..Default::default()
        }
    }

    /// Set the requested limit
    #[must_use]
    pub const fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the locale
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// Lookup direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeocodingMode {
    /// Place name to coordinates
    Forward,
    /// Coordinates to place name
    Reverse,
}

/// What is being looked up
#[derive(Debug, Clone, PartialEq)]
pub enum QueryKind {
    /// Forward lookup of non-empty text
    Forward {
        /// The place description
        text: String,
    },
    /// Reverse lookup of a validated point
    Reverse {
        /// The point to describe
        point: GeoPoint,
    },
}

/// A validated geocoding query
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodingQuery {
    kind: QueryKind,
    limit: u32,
    locale: String,
}

impl GeocodingQuery {
    /// Validate raw request parameters
    ///
    /// Reverse mode requires a parseable, in-range `point`; forward mode
    /// requires non-empty `q`. The limit is clamped, never rejected, and
    /// the locale is passed through unchanged.
    pub fn from_params(params: &GeocodingParams) -> Result<Self, QueryError> {
        if params.reverse {
            let point = params
                .point
                .as_deref()
                .filter(|p| !p.is_empty())
                .ok_or(QueryError::MissingPoint)?
                .parse::<GeoPoint>()?;
            Ok(Self::reverse(point, params.limit, &params.locale))
        } else {
            let text = params.q.as_deref().unwrap_or_default();
            Self::forward(text, params.limit, &params.locale)
        }
    }

    /// Build a forward query
    pub fn forward(
        text: impl Into<String>,
        limit: i64,
        locale: impl Into<String>,
    ) -> Result<Self, QueryError> {
        let text = text.into();
        if text.is_empty() {
            return Err(QueryError::MissingQueryText);
        }
        Ok(Self {
            kind: QueryKind::Forward { text },
            limit: clamp_limit(limit),
            locale: locale.into(),
        })
    }

    /// Build a reverse query
    #[must_use]
    pub fn reverse(point: GeoPoint, limit: i64, locale: impl Into<String>) -> Self {
        Self {
            kind: QueryKind::Reverse { point },
            limit: clamp_limit(limit),
            locale: locale.into(),
        }
    }

    /// What is being looked up
    #[must_use]
    pub const fn kind(&self) -> &QueryKind {
        &self.kind
    }

    /// Lookup direction
    #[must_use]
    pub const fn mode(&self) -> GeocodingMode {
        match self.kind {
            QueryKind::Forward { .. } => GeocodingMode::Forward,
            QueryKind::Reverse { .. } => GeocodingMode::Reverse,
        }
    }

    /// Query text, present in forward mode
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            QueryKind::Forward { text } => Some(text),
            QueryKind::Reverse { .. } => None,
        }
    }

    /// Point, present in reverse mode
    #[must_use]
    pub const fn point(&self) -> Option<GeoPoint> {
        match self.kind {
            QueryKind::Forward { .. } => None,
            QueryKind::Reverse { point } => Some(point),
        }
    }

    /// Clamped result limit, always within [`MIN_LIMIT`, `MAX_LIMIT`]
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Result locale
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl TryFrom<&GeocodingParams> for GeocodingQuery {
    type Error = QueryError;

    fn try_from(params: &GeocodingParams) -> Result<Self, Self::Error> {
        Self::from_params(params)
    }
}

/// Clamp a requested limit into [`MIN_LIMIT`, `MAX_LIMIT`]
#[must_use]
pub fn clamp_limit(limit: i64) -> u32 {
    let clamped = limit.clamp(i64::from(MIN_LIMIT), i64::from(MAX_LIMIT));
    u32::try_from(clamped).unwrap_or(MAX_LIMIT)
}
