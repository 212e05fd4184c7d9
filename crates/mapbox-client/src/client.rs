//! MapBox Geocoding HTTP client

use geocoding_core::http::{default_http_client, fetch_json};
use geocoding_core::{Provider, Result};

use crate::config::MapBoxConfig;
use crate::params::{ForwardGeocodingParameters, ReverseGeocodingParameters};
use crate::query;
use crate::types::FeatureCollection;

const PROVIDER: Provider = Provider::MapBox;

/// Client for the MapBox Geocoding v5 API
pub struct MapBoxClient {
    http: reqwest::Client,
    config: MapBoxConfig,
    base_url: String,
}

impl MapBoxClient {
    pub const BASE_URL: &'static str = "https://api.mapbox.com";

    pub fn new(config: MapBoxConfig) -> Self {
        Self::with_base_url(config, Self::BASE_URL)
    }

    pub fn with_base_url(config: MapBoxConfig, base_url: &str) -> Self {
        Self::with_http_client(config, base_url, default_http_client())
    }

    pub fn with_http_client(config: MapBoxConfig, base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            config,
            base_url: base_url.to_string(),
        }
    }

    /// Search text to features
    pub async fn forward_geocode(
        &self,
        params: &ForwardGeocodingParameters,
    ) -> Result<FeatureCollection> {
        let url = query::forward_geocode_url(&self.base_url, params, &self.config)?;
        fetch_json(&self.http, PROVIDER, "forward_geocode", self.http.get(url)).await
    }

    /// Features containing or nearest to a point
    pub async fn reverse_geocode(
        &self,
        params: &ReverseGeocodingParameters,
    ) -> Result<FeatureCollection> {
        let url = query::reverse_geocode_url(&self.base_url, params, &self.config)?;
        fetch_json(&self.http, PROVIDER, "reverse_geocode", self.http.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;
    use geocoding_core::ErrorKind;
    use geocoding_test_server::MockServer;

    const WHITE_HOUSE: &str = r#"{
        "type": "FeatureCollection",
        "query": [-77.036547, 38.897675],
        "features": [{
            "id": "address.1",
            "type": "Feature",
            "place_type": ["address"],
            "relevance": 1,
            "address": "1600",
            "properties": {"accuracy": "rooftop"},
            "text": "Pennsylvania Avenue Northwest",
            "place_name": "1600 Pennsylvania Avenue Northwest, Washington, District of Columbia 20500, United States",
            "center": [-77.036547, 38.897675],
            "geometry": {"type": "Point", "coordinates": [-77.036547, 38.897675]},
            "context": [{"id": "place.1", "wikidata": "Q61", "text": "Washington"}]
        }],
        "attribution": "NOTICE"
    }"#;

    fn client(server: &MockServer) -> MapBoxClient {
        MapBoxClient::with_base_url(MapBoxConfig::new("pk.test"), server.base_url())
    }

    #[tokio::test]
    async fn test_reverse_geocode_end_to_end() {
        let server = MockServer::start(200, WHITE_HOUSE).await;

        let response = client(&server)
            .reverse_geocode(&ReverseGeocodingParameters::new(Coordinate::new(
                -77.036547, 38.897675,
            )))
            .await
            .unwrap();

        let feature = &response.features[0];
        assert_eq!(feature.address.as_deref(), Some("1600"));
        assert_eq!(feature.context[0].text(), Some("Washington"));
        assert_eq!(feature.names.records().len(), 1);

        let requests = server.requests();
        assert_eq!(
            requests[0].path(),
            "/geocoding/v5/mapbox.places/-77.036547,38.897675.json"
        );
        assert_eq!(requests[0].query(), Some("access_token=pk.test"));
    }

    #[tokio::test]
    async fn test_forward_geocode_end_to_end() {
        let server = MockServer::start(200, WHITE_HOUSE).await;

        let response = client(&server)
            .forward_geocode(&ForwardGeocodingParameters::new("1600 Pennsylvania Ave"))
            .await
            .unwrap();

        assert_eq!(response.features.len(), 1);
        assert_eq!(
            server.requests()[0].path(),
            "/geocoding/v5/mapbox.places/1600%20Pennsylvania%20Ave.json"
        );
    }

    #[tokio::test]
    async fn test_invalid_token() {
        let server = MockServer::start(401, r#"{"message":"Not Authorized - Invalid Token"}"#).await;

        let err = client(&server)
            .forward_geocode(&ForwardGeocodingParameters::new("Paris"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Status);
        assert_eq!(err.status_code(), Some(401));
        assert!(err.message().contains("Invalid Token"));
    }

    #[tokio::test]
    async fn test_malformed_center() {
        let server = MockServer::start(
            200,
            r#"{"type": "FeatureCollection", "features": [{"id": "a", "type": "Feature", "center": [1]}]}"#,
        )
        .await;

        let err = client(&server)
            .forward_geocode(&ForwardGeocodingParameters::new("x"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Json);
        assert!(err.message().contains("[longitude, latitude]"));
    }
}
