//! Geocoding gateway
//!
//! Sequences validation, URL building, the upstream call and translation.
//! The gateway is immutable after construction and safe to share across
//! tasks behind an `Arc`.

use domain::{CanonicalResponse, GeocodingParams, GeocodingQuery};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use crate::client::{HttpUpstreamClient, UpstreamClient};
use crate::config::PhotonConfig;
use crate::error::{ErrorKind, GeocodingError};
use crate::request::build_url;
use crate::translator::translate;

/// Status and JSON body handed to whatever serves the HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReply {
    /// HTTP status
    pub status: StatusCode,
    /// Either a serialized `CanonicalResponse` or an `{"error": ...}` body
    pub body: Value,
}

impl GatewayReply {
    /// Whether the lookup succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// Forward and reverse geocoding against a single Photon instance
#[derive(Debug)]
pub struct GeocodingGateway<C = HttpUpstreamClient> {
    client: C,
    base_url: String,
}

impl GeocodingGateway<HttpUpstreamClient> {
    /// Create a gateway backed by the default HTTP client
    ///
    /// # Errors
    ///
    /// Returns `GeocodingError::Internal` if the configuration is invalid
    /// or the HTTP client cannot be initialized.
    pub fn from_config(config: &PhotonConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(|e| GeocodingError::Internal(format!("invalid configuration: {e}")))?;
        let client = HttpUpstreamClient::new(config)?;
        Ok(Self::new(client, config.base_url.clone()))
    }
}

impl<C: UpstreamClient> GeocodingGateway<C> {
    /// Create a gateway with an explicit upstream client
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Configured provider base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run one lookup
    ///
    /// Invalid parameters are rejected before any upstream call. Exactly
    /// one upstream request is made otherwise.
    #[instrument(skip(self))]
    pub async fn geocode(
        &self,
        params: &GeocodingParams,
    ) -> Result<CanonicalResponse, GeocodingError> {
        let query = GeocodingQuery::from_params(params).inspect_err(|e| {
            warn!(reason = %e, "Invalid geocoding request");
        })?;
        self.lookup(&query).await
    }

    /// Run one lookup for an already validated query
    pub async fn lookup(
        &self,
        query: &GeocodingQuery,
    ) -> Result<CanonicalResponse, GeocodingError> {
        let url = build_url(&self.base_url, query);
        debug!(%url, mode = ?query.mode(), "Geocoding request");

        let response = self.client.fetch(&url).await.inspect_err(|e| {
            error!(error = %e, %url, "Geocoding service unreachable");
        })?;

        if response.status != StatusCode::OK {
            warn!(status = %response.status, %url, "Geocoding service returned error");
            return Err(GeocodingError::UpstreamError {
                status: response.status,
            });
        }

        let limit = usize::try_from(query.limit()).unwrap_or(usize::MAX);
        translate(&response.body, limit, query.locale()).inspect_err(|e| {
            error!(error = %e, %url, "Failed to parse geocoding response");
        })
    }

    /// Run one lookup and map the outcome to a status and JSON body
    ///
    /// Never fails: every error is classified into a reply.
    pub async fn respond(&self, params: &GeocodingParams) -> GatewayReply {
        let outcome = self.geocode(params).await.and_then(|response| {
            serde_json::to_value(&response).map_err(|e| {
                GeocodingError::Internal(format!("failed to serialize response: {e}"))
            })
        });

        match outcome {
            Ok(body) => GatewayReply {
                status: StatusCode::OK,
                body,
            },
            Err(e) => {
                if e.kind() == ErrorKind::Internal {
                    error!(error = %e, "Geocoding error");
                }
                GatewayReply {
                    status: e.status(),
                    body: serde_json::json!({ "error": e.public_message() }),
                }
            },
        }
    }
}
