//! Comuline HTTP client.
//!
//! Async client for the two upstream endpoints: the station directory
//! and per-station departure schedules. No caching and no retries; every
//! call goes to the network.

use crate::directory::{Station, StationId};
use crate::schedule::Departure;

use super::error::ComulineError;
use super::types::{Envelope, ScheduleDto, StationDto, convert_departures, convert_stations};

/// Default base URL for the Comuline API.
const DEFAULT_BASE_URL: &str = "https://www.api.comuline.com/v1";

/// Configuration for the Comuline client.
#[derive(Debug, Clone)]
pub struct ComulineConfig {
    /// Base URL for the API (defaults to production Comuline)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ComulineConfig {
    /// Create a new config with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ComulineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Comuline commuter-rail API.
#[derive(Debug, Clone)]
pub struct ComulineClient {
    http: reqwest::Client,
    base_url: String,
}

impl ComulineClient {
    /// Create a new Comuline client with the given configuration.
    pub fn new(config: ComulineConfig) -> Result<Self, ComulineError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the full station directory.
    pub async fn fetch_stations(&self) -> Result<Vec<Station>, ComulineError> {
        let url = format!("{}/station/", self.base_url);

        let body = self.get(&url).await?;

        let envelope: Envelope<StationDto> =
            serde_json::from_str(&body).map_err(|e| ComulineError::Json {
                message: e.to_string(),
            })?;

        Ok(convert_stations(envelope.data))
    }

    /// Fetch the departure schedule for a station.
    pub async fn fetch_schedule(&self, station: &StationId) -> Result<Vec<Departure>, ComulineError> {
        let url = format!("{}/schedule/{}", self.base_url, station.as_str());

        let body = self.get(&url).await?;

        let envelope: Envelope<ScheduleDto> =
            serde_json::from_str(&body).map_err(|e| ComulineError::Json {
                message: e.to_string(),
            })?;

        Ok(convert_departures(envelope.data)?)
    }

    /// Issue a GET request and return the body, mapping non-success
    /// statuses to `ComulineError::Api`.
    async fn get(&self, url: &str) -> Result<String, ComulineError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ComulineError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}
