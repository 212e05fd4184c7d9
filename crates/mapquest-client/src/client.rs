//! MapQuest Geocoding HTTP client

use geocoding_core::http::{default_http_client, fetch_json};
use geocoding_core::{GeocodingError, Provider, Result};
use tracing::warn;
use url::Url;

use crate::config::MapQuestConfig;
use crate::params::{GeocodeParameters, ReverseGeocodeParameters};
use crate::query;
use crate::types::GeocodeResponse;

const PROVIDER: Provider = Provider::MapQuest;

/// Client for the MapQuest Geocoding API
pub struct MapQuestClient {
    http: reqwest::Client,
    config: MapQuestConfig,
    base_url: String,
}

impl MapQuestClient {
    /// Licensed data host
    pub const LICENSED_BASE_URL: &'static str = "https://www.mapquestapi.com/geocoding/v1";
    /// OpenStreetMap data host
    pub const OPEN_DATA_BASE_URL: &'static str = "https://open.mapquestapi.com/geocoding/v1";

    /// Create a client on the host selected by [`MapQuestConfig::use_open_data`]
    pub fn new(config: MapQuestConfig) -> Self {
        let base_url = if config.use_open_data() {
            Self::OPEN_DATA_BASE_URL
        } else {
            Self::LICENSED_BASE_URL
        };
        Self::with_base_url(config, base_url)
    }

    pub fn with_base_url(config: MapQuestConfig, base_url: &str) -> Self {
        Self::with_http_client(config, base_url, default_http_client())
    }

    pub fn with_http_client(config: MapQuestConfig, base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            config,
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Geocode a single-line address
    pub async fn geocode(&self, params: &GeocodeParameters) -> Result<GeocodeResponse> {
        let url = query::geocode_url(&self.base_url, params, &self.config)?;
        self.get("geocode", url).await
    }

    pub async fn reverse_geocode(
        &self,
        params: &ReverseGeocodeParameters,
    ) -> Result<GeocodeResponse> {
        let url = query::reverse_geocode_url(&self.base_url, params, &self.config)?;
        self.get("reverse_geocode", url).await
    }

    async fn get(&self, operation: &'static str, url: Url) -> Result<GeocodeResponse> {
        let response: GeocodeResponse =
            fetch_json(&self.http, PROVIDER, operation, self.http.get(url)).await?;

        // MapQuest reports bad input in `info` on an HTTP 200
        if response.info.statuscode != 0 {
            warn!(
                operation,
                statuscode = response.info.statuscode,
                "MapQuest returned error status"
            );
            let detail = response.info.messages.join("; ");
            return Err(GeocodingError::api(
                PROVIDER,
                format!("statuscode {}: {}", response.info.statuscode, detail),
            ));
        }
        Ok(response)
    }
}
