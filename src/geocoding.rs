//! Geocoding client for the location search provider
//!
//! Resolves a free-text location name into coordinates and a country.
//! Failures never propagate to the caller; every failure mode collapses
//! into `GeoResult::NotFound` at this boundary.

use crate::models::GeoResult;
use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Response body of the geocoding search endpoint
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingCandidate>>,
}

/// One candidate returned by the geocoding provider
///
/// All three fields are required; a first candidate missing any of them is
/// treated as a malformed body and therefore a failed lookup.
#[derive(Debug, Deserialize)]
struct GeocodingCandidate {
    latitude: f64,
    longitude: f64,
    country: String,
}

/// Client for the geocoding provider
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

impl GeocodingClient {
    /// Create a client against the given provider base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("WeatherFront/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Resolve a location name to coordinates via the provider's search endpoint
    ///
    /// Always picks the first candidate in provider order; there is no ranking
    /// or disambiguation. Transport errors, non-success statuses, malformed
    /// bodies and empty candidate lists all map to `GeoResult::NotFound`.
    #[instrument(skip(self))]
    pub async fn resolve(&self, location: &str) -> GeoResult {
        match self.search(location).await {
            Ok(Some(candidate)) => {
                debug!(
                    latitude = candidate.latitude,
                    longitude = candidate.longitude,
                    country = %candidate.country,
                    "geocoded '{}'",
                    location
                );
                GeoResult::Found {
                    latitude: candidate.latitude,
                    longitude: candidate.longitude,
                    country: candidate.country,
                }
            }
            Ok(None) => {
                debug!("no geocoding candidates for '{}'", location);
                GeoResult::NotFound
            }
            Err(e) => {
                warn!("geocoding lookup failed for '{}': {:#}", location, e);
                GeoResult::NotFound
            }
        }
    }

    async fn search(&self, location: &str) -> Result<Option<GeocodingCandidate>> {
        let url = format!(
            "{}/v1/search?name={}",
            self.base_url,
            urlencoding::encode(location)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| "Geocoding request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("geocoding provider returned status {status}");
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse geocoding response")?;

        Ok(body.results.unwrap_or_default().into_iter().next())
    }
}
