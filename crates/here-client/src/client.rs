//! HERE Geocoding & Search HTTP client

use geocoding_core::http::{default_http_client, fetch_json};
use geocoding_core::{Provider, Result};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::HereConfig;
use crate::params::{
    AutocompleteParameters, AutosuggestParameters, BrowseParameters, DiscoverParameters,
    GeocodeParameters, LookupParameters, ReverseGeocodeParameters,
};
use crate::query;
use crate::types::{Item, ItemsResponse};

const PROVIDER: Provider = Provider::Here;

/// Client for the HERE Geocoding & Search v7 API
///
/// By default each endpoint is called on its own host,
/// `https://{endpoint}.search.hereapi.com/v1/{endpoint}`. A custom base URL
/// replaces the host for every endpoint (`{base}/v1/{endpoint}`).
pub struct HereClient {
    http: reqwest::Client,
    config: HereConfig,
    base_url: Option<String>,
}

impl HereClient {
    pub fn new(config: HereConfig) -> Self {
        Self {
            http: default_http_client(),
            config,
            base_url: None,
        }
    }

    /// Send every endpoint to `base_url` instead of the per-endpoint hosts
    pub fn with_base_url(config: HereConfig, base_url: &str) -> Self {
        Self::with_http_client(config, base_url, default_http_client())
    }

    pub fn with_http_client(config: HereConfig, base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            config,
            base_url: Some(base_url.to_string()),
        }
    }

    fn host(&self, endpoint: &str) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => format!("https://{endpoint}.search.hereapi.com"),
        }
    }

    pub async fn geocode(&self, params: &GeocodeParameters) -> Result<ItemsResponse> {
        let url = query::geocode_url(&self.host("geocode"), params, &self.config)?;
        self.get("geocode", url).await
    }

    pub async fn reverse_geocode(&self, params: &ReverseGeocodeParameters) -> Result<ItemsResponse> {
        let url = query::reverse_geocode_url(&self.host("revgeocode"), params, &self.config)?;
        self.get("reverse_geocode", url).await
    }

    /// Free-text search for places and addresses near a position
    pub async fn discover(&self, params: &DiscoverParameters) -> Result<ItemsResponse> {
        let url = query::discover_url(&self.host("discover"), params, &self.config)?;
        self.get("discover", url).await
    }

    pub async fn autosuggest(&self, params: &AutosuggestParameters) -> Result<ItemsResponse> {
        let url = query::autosuggest_url(&self.host("autosuggest"), params, &self.config)?;
        self.get("autosuggest", url).await
    }

    pub async fn autocomplete(&self, params: &AutocompleteParameters) -> Result<ItemsResponse> {
        let url = query::autocomplete_url(&self.host("autocomplete"), params, &self.config)?;
        self.get("autocomplete", url).await
    }

    pub async fn browse(&self, params: &BrowseParameters) -> Result<ItemsResponse> {
        let url = query::browse_url(&self.host("browse"), params, &self.config)?;
        self.get("browse", url).await
    }

    /// Fetch a single result by its HERE ID
    pub async fn lookup(&self, params: &LookupParameters) -> Result<Item> {
        let url = query::lookup_url(&self.host("lookup"), params, &self.config)?;
        self.get("lookup", url).await
    }

    async fn get<T: DeserializeOwned>(&self, operation: &'static str, url: Url) -> Result<T> {
        fetch_json(&self.http, PROVIDER, operation, self.http.get(url)).await
    }
}
