//! Upstream HTTP client
//!
//! A single GET per lookup, no retries. The request timeout comes from
//! [`PhotonConfig::timeout_secs`].

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::config::PhotonConfig;
use crate::error::GeocodingError;

/// Raw provider answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    /// HTTP status returned by the provider
    pub status: StatusCode,
    /// Response body as text
    pub body: String,
}

impl UpstreamResponse {
    /// Create a response
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for fetching a provider URL
///
/// Implementations return `GeocodingError::UpstreamUnavailable` for
/// transport failures and hand every received status back unchanged.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Perform one GET against `url`
    async fn fetch(&self, url: &str) -> Result<UpstreamResponse, GeocodingError>;
}

/// `reqwest`-based upstream client
#[derive(Debug, Clone)]
pub struct HttpUpstreamClient {
    client: Client,
    timeout_secs: u64,
}

impl HttpUpstreamClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &PhotonConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::Internal(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    fn transport_error(&self, e: &reqwest::Error) -> GeocodingError {
        if e.is_timeout() {
            GeocodingError::UpstreamUnavailable(format!(
                "request timed out after {} seconds",
                self.timeout_secs
            ))
        } else {
            GeocodingError::UpstreamUnavailable(e.to_string())
        }
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<UpstreamResponse, GeocodingError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;

        debug!(%status, bytes = body.len(), "Received upstream response");

        Ok(UpstreamResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpUpstreamClient::new(&PhotonConfig::for_testing());
        assert!(client.is_ok());
    }

    #[test]
    fn test_upstream_response_new() {
        let response = UpstreamResponse::new(StatusCode::OK, "{}");
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "{}");
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let client = HttpUpstreamClient::new(&PhotonConfig::for_testing()).unwrap();
        let result = client.fetch("http://127.0.0.1:9/api/?q=x").await;
        assert!(matches!(
            result,
            Err(GeocodingError::UpstreamUnavailable(_))
        ));
    }
}
