//! Geocoding error types and their classification
//!
//! Every failure a lookup can hit maps to exactly one [`ErrorKind`], which
//! fixes the status code and the message shown to the caller.

use domain::QueryError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Externally visible failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request parameters were rejected
    InvalidQuery,
    /// The provider could not be reached
    UpstreamUnavailable,
    /// The provider answered with a non-200 status
    UpstreamError,
    /// The provider's body was not valid JSON
    ParseError,
    /// Anything else
    Internal,
}

/// Errors that can occur during a geocoding lookup
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Query validation failed
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),

    /// Transport-level failure talking to the provider
    #[error("Geocoding service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Provider responded with a non-200 status
    #[error("Geocoding service returned error: {}", .status.as_u16())]
    UpstreamError {
        /// Status returned by the provider
        status: StatusCode,
    },

    /// Provider body could not be parsed as JSON
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Unexpected failure
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GeocodingError {
    /// The failure category
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidQuery(_) => ErrorKind::InvalidQuery,
            Self::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            Self::UpstreamError { .. } => ErrorKind::UpstreamError,
            Self::ParseError(_) => ErrorKind::ParseError,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Status code to answer the caller with
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidQuery => StatusCode::BAD_REQUEST,
            ErrorKind::UpstreamError => StatusCode::BAD_GATEWAY,
            ErrorKind::UpstreamUnavailable | ErrorKind::ParseError | ErrorKind::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    /// Message safe to show to the caller
    ///
    /// Transport and parse details stay in logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::UpstreamUnavailable(_) => "Geocoding service unavailable".to_string(),
            Self::ParseError(_) => "Failed to parse geocoding service response".to_string(),
            Self::InvalidQuery(_) | Self::UpstreamError { .. } | Self::Internal(_) => {
                self.to_string()
            },
        }
    }

    /// Returns true if a caller-side retry might succeed
    ///
    /// The gateway itself never retries.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::UpstreamUnavailable(_) => true,
            Self::UpstreamError { status } => status.is_server_error(),
            Self::InvalidQuery(_) | Self::ParseError(_) | Self::Internal(_) => false,
        }
    }
}
