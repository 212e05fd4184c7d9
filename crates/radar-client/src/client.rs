//! Radar HTTP client

use geocoding_core::http::{default_http_client, fetch_json};
use geocoding_core::{Provider, Result};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::RadarConfig;
use crate::params::{
    AutocompleteParameters, ForwardGeocodeParameters, IpGeocodeParameters,
    ReverseGeocodeParameters, SearchPlacesParameters,
};
use crate::query;
use crate::types::{AddressesResponse, IpGeocodeResponse, PlacesResponse};

const PROVIDER: Provider = Provider::Radar;

/// Client for the Radar v1 geocoding and search APIs
pub struct RadarClient {
    http: reqwest::Client,
    config: RadarConfig,
    base_url: String,
}

impl RadarClient {
    pub const BASE_URL: &'static str = "https://api.radar.io/v1";

    pub fn new(config: RadarConfig) -> Self {
        Self::with_base_url(config, Self::BASE_URL)
    }

    pub fn with_base_url(config: RadarConfig, base_url: &str) -> Self {
        Self::with_http_client(config, base_url, default_http_client())
    }

    pub fn with_http_client(config: RadarConfig, base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            config,
            base_url: base_url.to_string(),
        }
    }

    pub async fn forward_geocode(
        &self,
        params: &ForwardGeocodeParameters,
    ) -> Result<AddressesResponse> {
        let url = query::forward_geocode_url(&self.base_url, params)?;
        self.get("forward_geocode", url).await
    }

    pub async fn reverse_geocode(
        &self,
        params: &ReverseGeocodeParameters,
    ) -> Result<AddressesResponse> {
        let url = query::reverse_geocode_url(&self.base_url, params)?;
        self.get("reverse_geocode", url).await
    }

    /// Geocode an IP address, or the caller's own when none is given
    pub async fn ip_geocode(&self, params: &IpGeocodeParameters) -> Result<IpGeocodeResponse> {
        let url = query::ip_geocode_url(&self.base_url, params)?;
        self.get("ip_geocode", url).await
    }

    pub async fn autocomplete(&self, params: &AutocompleteParameters) -> Result<AddressesResponse> {
        let url = query::autocomplete_url(&self.base_url, params)?;
        self.get("autocomplete", url).await
    }

    /// Find chain, category or group places near a point
    pub async fn search_places(&self, params: &SearchPlacesParameters) -> Result<PlacesResponse> {
        let url = query::search_places_url(&self.base_url, params)?;
        self.get("search_places", url).await
    }

    async fn get<T: DeserializeOwned>(&self, operation: &'static str, url: Url) -> Result<T> {
        let request = self
            .http
            .get(url)
            .header(AUTHORIZATION, self.config.api_key());
        fetch_json(&self.http, PROVIDER, operation, request).await
    }
}
