//! Outbound HTTP client for the `/external` endpoint.
//!
//! # Responsibilities
//! - Issue one GET against a fixed target URL
//! - Bound the whole exchange (connect, headers, body) by a timeout
//! - Return the body untouched
//!
//! # Design Decisions
//! - One reqwest client built at startup and shared, so connections are reused
//! - Upstream status codes are not inspected; any body is passed through
//! - No retries

use std::time::Duration;
use thiserror::Error;
use url::{Host, Url};

/// Errors from the outbound client.
#[derive(Debug, Error)]
pub enum ExternalError {
    #[error("invalid target URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Client for the single upstream API.
#[derive(Clone)]
pub struct ExternalApi {
    client: reqwest::Client,
    url: Url,
}

impl ExternalApi {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, ExternalError> {
        let url = Url::parse(url).map_err(|source| ExternalError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let mut builder = reqwest::Client::builder().timeout(timeout);
        // Proxies from the environment cannot reach our own loopback.
        if is_loopback(&url) {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the target and return its full body as text.
    pub async fn fetch(&self) -> Result<String, ExternalError> {
        let response = self.client.get(self.url.clone()).send().await?;

        tracing::debug!(
            url = %self.url,
            status = %response.status(),
            "External API responded"
        );

        Ok(response.text().await?)
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        None => false,
    }
}
