use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::gateway::config::GatewayConfig;
use crate::gateway::error::RemoteError;
use crate::gateway::traits::ListingSource;
use crate::models::{Booking, BookingRequest, Property, SiteVisit, SiteVisitRequest};

/// Single point of outbound communication with the listing backend.
///
/// Every operation either returns the decoded payload untouched or fails
/// with a [`RemoteError`] already carrying its display string. No timeout is
/// configured, so a hung request hangs the caller, and requests are never
/// retried, cached or de-duplicated.
pub struct EstateGateway {
    client: Client,
    base_url: String,
}

impl EstateGateway {
    /// Create a gateway against the environment-configured backend.
    pub fn new() -> Result<Self> {
        Self::with_config(GatewayConfig::from_env())
    }

    /// Create a gateway for an explicit configuration.
    pub fn with_config(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("estate-concierge/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Base URL this gateway talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every listed property. The decoded list is returned verbatim,
    /// with no client-side filtering or validation beyond decoding.
    pub async fn list_properties(&self) -> Result<Vec<Property>, RemoteError> {
        self.get_json("/api/properties").await
    }

    /// Fetch a single property by id. The id must be non-empty; a missing id
    /// surfaces as whatever error message the server sends back.
    pub async fn get_property(&self, id: &str) -> Result<Property, RemoteError> {
        self.get_json(&format!("/api/properties/{}", id)).await
    }

    /// Create a purchase booking. Payload correctness (guest contact fields,
    /// payment amount) is the caller's job; see [`crate::forms`].
    pub async fn create_booking(&self, payload: &BookingRequest) -> Result<Booking, RemoteError> {
        self.post_json("/api/bookings", payload).await
    }

    /// Schedule a site visit.
    pub async fn create_site_visit(
        &self,
        payload: &SiteVisitRequest,
    ) -> Result<SiteVisit, RemoteError> {
        self.post_json("/api/site-visits", payload).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn post_json<T, P>(&self, path: &str, payload: &P) -> Result<T, RemoteError>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(payload).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RemoteError> {
        let status = response.status();
        if !status.is_success() {
            warn!("Backend answered {} for {}", status, response.url());
            return Err(RemoteError::from_error_response(response).await);
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ListingSource for EstateGateway {
    async fn list_properties(&self) -> Result<Vec<Property>, RemoteError> {
        EstateGateway::list_properties(self).await
    }

    fn source_name(&self) -> &'static str {
        "Vision Estate API"
    }
}
