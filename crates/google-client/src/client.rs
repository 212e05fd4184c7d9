//! Google Maps HTTP client

use geocoding_core::http::{default_http_client, fetch_json};
use geocoding_core::{GeocodingError, Provider, Result};
use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

use crate::config::GoogleConfig;
use crate::params::{
    AutocompleteParameters, FindPlaceParameters, GeocodeParameters, NearbySearchParameters,
    PlaceDetailsParameters, ReverseGeocodeParameters, TextSearchParameters,
};
use crate::query;
use crate::types::{
    AutocompleteResponse, FindPlaceResponse, GeocodeResponse, GoogleResponse,
    PlaceDetailsResponse, PlacesSearchResponse,
};

const PROVIDER: Provider = Provider::Google;

/// Client for the Google Geocoding and Places web services
pub struct GoogleClient {
    http: reqwest::Client,
    config: GoogleConfig,
    base_url: String,
}

impl GoogleClient {
    /// Base URL shared by the Geocoding and Places APIs
    pub const BASE_URL: &'static str = "https://maps.googleapis.com/maps/api";

    pub fn new(config: GoogleConfig) -> Self {
        Self::with_base_url(config, Self::BASE_URL)
    }

    /// Create a new client with a custom base URL
    pub fn with_base_url(config: GoogleConfig, base_url: &str) -> Self {
        Self::with_http_client(config, base_url, default_http_client())
    }

    pub fn with_http_client(config: GoogleConfig, base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            config,
            base_url: base_url.to_string(),
        }
    }

    /// Geocode an address or a set of component filters
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

    /// Find a place from text or a phone number
    pub async fn find_place(&self, params: &FindPlaceParameters) -> Result<FindPlaceResponse> {
        let url = query::find_place_url(&self.base_url, params, &self.config)?;
        self.get("find_place", url).await
    }

    pub async fn nearby_search(
        &self,
        params: &NearbySearchParameters,
    ) -> Result<PlacesSearchResponse> {
        let url = query::nearby_search_url(&self.base_url, params, &self.config)?;
        self.get("nearby_search", url).await
    }

    pub async fn text_search(&self, params: &TextSearchParameters) -> Result<PlacesSearchResponse> {
        let url = query::text_search_url(&self.base_url, params, &self.config)?;
        self.get("text_search", url).await
    }

    pub async fn place_details(
        &self,
        params: &PlaceDetailsParameters,
    ) -> Result<PlaceDetailsResponse> {
        let url = query::place_details_url(&self.base_url, params, &self.config)?;
        self.get("place_details", url).await
    }

    pub async fn autocomplete(
        &self,
        params: &AutocompleteParameters,
    ) -> Result<AutocompleteResponse> {
        let url = query::autocomplete_url(&self.base_url, params, &self.config)?;
        self.get("autocomplete", url).await
    }

    /// Fetch and decode, turning a non-success `status` into an error
    async fn get<T>(&self, operation: &'static str, url: Url) -> Result<T>
    where
        T: DeserializeOwned + GoogleResponse,
    {
        let response: T = fetch_json(&self.http, PROVIDER, operation, self.http.get(url)).await?;
        check_status(operation, response)
    }
}

fn check_status<T: GoogleResponse>(operation: &'static str, response: T) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    warn!(operation, status = %status, "Google returned error status");
    let message = match response.error_message() {
        Some(detail) => format!("{status}: {detail}"),
        None => status.to_string(),
    };
    Err(GeocodingError::api(PROVIDER, message))
}
