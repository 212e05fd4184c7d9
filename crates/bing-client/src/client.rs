//! Bing Maps HTTP client

use geocoding_core::http::{default_http_client, fetch_json};
use geocoding_core::{Provider, Result};

use crate::config::BingConfig;
use crate::params::{
    AddressParameters, AutosuggestParameters, GeocodingParameters, ReverseGeocodingParameters,
};
use crate::query;
use crate::types::{AutosuggestResponse, LocationResponse};

const PROVIDER: Provider = Provider::Bing;

/// Client for the Bing Maps Locations and Autosuggest APIs
pub struct BingClient {
    http: reqwest::Client,
    config: BingConfig,
    base_url: String,
}

impl BingClient {
    /// Base URL for the Bing Maps REST services
    pub const BASE_URL: &'static str = "https://dev.virtualearth.net/REST/v1";

    /// Create a new client against the public Bing Maps endpoint
    pub fn new(config: BingConfig) -> Self {
        Self::with_base_url(config, Self::BASE_URL)
    }

    /// Create a new client with a custom base URL
    pub fn with_base_url(config: BingConfig, base_url: &str) -> Self {
        Self::with_http_client(config, base_url, default_http_client())
    }

    /// Create a new client reusing an existing reqwest client
    pub fn with_http_client(config: BingConfig, base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            config,
            base_url: base_url.to_string(),
        }
    }

    /// Geocode a free-form query
    pub async fn geocode(&self, params: &GeocodingParameters) -> Result<LocationResponse> {
        let url = query::geocode_url(&self.base_url, params, &self.config)?;
        fetch_json(&self.http, PROVIDER, "geocode", self.http.get(url)).await
    }

    /// Geocode a structured address
    pub async fn geocode_address(&self, params: &AddressParameters) -> Result<LocationResponse> {
        let url = query::address_url(&self.base_url, params, &self.config)?;
        fetch_json(&self.http, PROVIDER, "geocode_address", self.http.get(url)).await
    }

    /// Find locations at a point
    pub async fn reverse_geocode(
        &self,
        params: &ReverseGeocodingParameters,
    ) -> Result<LocationResponse> {
        let url = query::reverse_geocode_url(&self.base_url, params, &self.config)?;
        fetch_json(&self.http, PROVIDER, "reverse_geocode", self.http.get(url)).await
    }

    /// Type-ahead suggestions for a partial query
    pub async fn autosuggest(&self, params: &AutosuggestParameters) -> Result<AutosuggestResponse> {
        let url = query::autosuggest_url(&self.base_url, params, &self.config)?;
        fetch_json(&self.http, PROVIDER, "autosuggest", self.http.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;
    use geocoding_core::ErrorKind;
    use geocoding_test_server::MockServer;

    const ONE_RESOURCE: &str = r#"{
        "authenticationResultCode": "ValidCredentials",
        "resourceSets": [{
            "estimatedTotal": 1,
            "resources": [{
                "__type": "Location:http://schemas.microsoft.com/search/local/ws/rest/v1",
                "name": "1 Microsoft Way, Redmond, WA 98052",
                "point": {"type": "Point", "coordinates": [47.64012, -122.12971]},
                "address": {"formattedAddress": "1 Microsoft Way, Redmond, WA 98052"},
                "confidence": "High",
                "entityType": "Address"
            }]
        }],
        "statusCode": 200,
        "statusDescription": "OK",
        "traceId": "trace-1"
    }"#;

    fn client(server: &MockServer) -> BingClient {
        BingClient::with_base_url(BingConfig::new("test-key"), server.base_url())
    }

    #[tokio::test]
    async fn test_geocode_end_to_end() {
        let server = MockServer::start(200, ONE_RESOURCE).await;

        let response = client(&server)
            .geocode(&GeocodingParameters::new("1 Microsoft Way Redmond WA"))
            .await
            .unwrap();

        assert_eq!(response.result_count(), 1);
        assert_eq!(response.status_code, 200);

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path(), "/Locations");
        assert_eq!(
            requests[0].query(),
            Some("query=1+Microsoft+Way+Redmond+WA&key=test-key")
        );
    }

    #[tokio::test]
    async fn test_reverse_geocode_end_to_end() {
        let server = MockServer::start(200, ONE_RESOURCE).await;

        let response = client(&server)
            .reverse_geocode(&ReverseGeocodingParameters::new(Coordinate::new(47.64, -122.13)))
            .await
            .unwrap();

        assert_eq!(response.result_count(), 1);
        assert_eq!(server.requests()[0].path(), "/Locations/47.64,-122.13");
    }

    #[tokio::test]
    async fn test_missing_query_fails_before_io() {
        let server = MockServer::start(200, ONE_RESOURCE).await;

        let err = client(&server)
            .geocode(&GeocodingParameters::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.provider(), Provider::Bing);
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_surfaces_status() {
        let server = MockServer::start(
            401,
            r#"{"statusCode":401,"errorDetails":["Access was denied."]}"#,
        )
        .await;

        let err = client(&server)
            .geocode(&GeocodingParameters::new("Seattle"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Status);
        assert_eq!(err.status_code(), Some(401));
    }

    #[tokio::test]
    async fn test_malformed_body_surfaces_json_error() {
        let server = MockServer::start(200, r#"{"resourceSets": "nope"}"#).await;

        let err = client(&server)
            .autosuggest(&AutosuggestParameters::new("Sea"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Json);
    }
}
