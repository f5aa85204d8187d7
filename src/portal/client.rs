//! HTTP client for the property-portal API.
//!
//! Thin fetch layer over the portal's `/v1` endpoints. Each fetch returns a
//! validated record collection; malformed individual records are skipped.

use crate::config::Config;
use crate::portal::models::{
    ApiNotice, ApiNotification, ApiPayment, ApiProperty, ApiRental, Notice, Notification, Payment,
    Property, Rental, RecordError, validate_batch,
};
use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Property-portal API client.
///
/// Holds the HTTP client, the base URL, and the bearer token when the user
/// is signed in.
#[derive(Debug, Clone)]
pub struct PortalClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL for the portal API (no trailing slash)
    base_url: String,
    /// Bearer token, present when signed in
    token: Option<String>,
}

impl PortalClient {
    /// Create a new portal client from configuration.
    ///
    /// # Details
    /// The client works unauthenticated for public listings, but every
    /// tenant/landlord endpoint requires a token; callers should check
    /// `is_authenticated` before fetching those.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    /// Whether a bearer token is configured.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Fetch and decode one collection endpoint.
    ///
    /// # Details
    /// Non-success statuses become errors carrying the response body, the
    /// same way the caller-facing status line wants them.
    async fn fetch_collection<R>(&self, path: &str) -> Result<Vec<R>>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", path))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Portal API error ({}): {}",
                status,
                error_text
            ));
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", path))
    }

    async fn fetch_validated<R, T>(&self, path: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned,
        T: TryFrom<R, Error = RecordError>,
    {
        let raw = self.fetch_collection::<R>(path).await?;
        Ok(validate_batch(raw))
    }

    /// Fetch the landlord's property listings.
    pub async fn fetch_properties(&self) -> Result<Vec<Property>> {
        self.fetch_validated::<ApiProperty, _>("/v1/landlord/properties/")
            .await
    }

    /// Fetch the current tenant's rentals.
    pub async fn fetch_rentals(&self) -> Result<Vec<Rental>> {
        self.fetch_validated::<ApiRental, _>("/v1/tenant/rentals/").await
    }

    /// Fetch notices visible to the current user.
    pub async fn fetch_notices(&self) -> Result<Vec<Notice>> {
        self.fetch_validated::<ApiNotice, _>("/v1/notices/").await
    }

    /// Fetch payment records.
    pub async fn fetch_payments(&self) -> Result<Vec<Payment>> {
        self.fetch_validated::<ApiPayment, _>("/v1/payments/").await
    }

    /// Fetch the notification inbox.
    pub async fn fetch_notifications(&self) -> Result<Vec<Notification>> {
        self.fetch_validated::<ApiNotification, _>("/v1/notifications/")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_client_unauthenticated_without_token() {
        let config = Config::default();
        let client = PortalClient::new(&config).unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_client_authenticated_with_token() {
        let config = Config {
            api_token: Some("token".to_string()),
            ..Config::default()
        };
        let client = PortalClient::new(&config).unwrap();
        assert!(client.is_authenticated());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let config = Config {
            api_base_url: "https://portal.example.com/api/".to_string(),
            ..Config::default()
        };
        let client = PortalClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://portal.example.com/api");
    }
}
