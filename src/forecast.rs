//! Forecast client for the daily weather provider
//!
//! Requests daily maximum/minimum temperature and mean relative humidity and
//! reshapes the provider's column-oriented arrays into row-oriented day
//! records. Failures never propagate; they collapse into `None` at this
//! boundary.

use crate::models::{DayRecord, WeatherSeries};
use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Daily metrics requested from the provider, in array order
const DAILY_METRICS: &str = "temperature_2m_max,temperature_2m_min,relative_humidity_2m_mean";

/// Response body of the forecast endpoint
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyData,
}

/// Parallel daily arrays as returned by the provider
#[derive(Debug, Deserialize)]
struct DailyData {
    time: Vec<String>,
    #[serde(rename = "temperature_2m_max")]
    temperature_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min")]
    temperature_min: Vec<f64>,
    #[serde(rename = "relative_humidity_2m_mean")]
    humidity_mean: Vec<f64>,
}

impl DailyData {
    /// Reshape the column-oriented arrays into per-day records, provider
    /// order preserved. Arrays of unequal length are a malformed body.
    fn into_series(self) -> Result<WeatherSeries> {
        let len = self.time.len();
        if self.temperature_max.len() != len
            || self.temperature_min.len() != len
            || self.humidity_mean.len() != len
        {
            bail!(
                "daily arrays disagree in length (time={}, max={}, min={}, humidity={})",
                len,
                self.temperature_max.len(),
                self.temperature_min.len(),
                self.humidity_mean.len()
            );
        }

        let mut series = Vec::with_capacity(len);
        for (i, date) in self.time.into_iter().enumerate() {
            series.push(DayRecord {
                date,
                temp_day: self.temperature_max[i],
                temp_night: self.temperature_min[i],
                humidity: self.humidity_mean[i],
            });
        }

        Ok(series)
    }
}

/// Client for the forecast provider
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
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

    /// Fetch the daily forecast for the given coordinates
    ///
    /// The provider resolves the timezone from the coordinates. Transport
    /// errors, non-success statuses and malformed bodies (including daily
    /// arrays of unequal length) all map to `None`.
    #[instrument(skip(self))]
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Option<WeatherSeries> {
        match self.daily(latitude, longitude).await {
            Ok(series) => {
                debug!(
                    "retrieved {} day records for ({:.4}, {:.4})",
                    series.len(),
                    latitude,
                    longitude
                );
                Some(series)
            }
            Err(e) => {
                warn!(
                    "forecast lookup failed for ({:.4}, {:.4}): {:#}",
                    latitude, longitude, e
                );
                None
            }
        }
    }

    async fn daily(&self, latitude: f64, longitude: f64) -> Result<WeatherSeries> {
        let url = format!(
            "{}/v1/forecast?latitude={latitude}&longitude={longitude}&daily={DAILY_METRICS}&timezone=auto",
            self.base_url
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| "Forecast request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("forecast provider returned status {status}");
        }

        let body: ForecastResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse forecast response")?;

        body.daily.into_series()
    }
}
