//! positionstack HTTP client

use geocoding_core::http::{default_http_client, fetch_json};
use geocoding_core::{Provider, Result};

use crate::config::PositionstackConfig;
use crate::params::{ForwardParameters, ReverseParameters};
use crate::query;
use crate::types::GeocodeResponse;

const PROVIDER: Provider = Provider::Positionstack;

/// Client for the positionstack v1 API
pub struct PositionstackClient {
    http: reqwest::Client,
    config: PositionstackConfig,
    base_url: String,
}

impl PositionstackClient {
    /// Create a client, using HTTPS when the config asks for it
    pub fn new(config: PositionstackConfig) -> Self {
        let scheme = if config.use_https() { "https" } else { "http" };
        let base_url = format!("{scheme}://api.positionstack.com/v1");
        Self::with_base_url(config, &base_url)
    }

    pub fn with_base_url(config: PositionstackConfig, base_url: &str) -> Self {
        Self::with_http_client(config, base_url, default_http_client())
    }

    pub fn with_http_client(
        config: PositionstackConfig,
        base_url: &str,
        http: reqwest::Client,
    ) -> Self {
        Self {
            http,
            config,
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward geocode free text
    pub async fn forward(&self, params: &ForwardParameters) -> Result<GeocodeResponse> {
        let url = query::forward_url(&self.base_url, params, &self.config)?;
        fetch_json(&self.http, PROVIDER, "forward", self.http.get(url)).await
    }

    /// Reverse geocode a coordinate or an IP address
    pub async fn reverse(&self, params: &ReverseParameters) -> Result<GeocodeResponse> {
        let url = query::reverse_url(&self.base_url, params, &self.config)?;
        fetch_json(&self.http, PROVIDER, "reverse", self.http.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ReverseQuery;
    use geocoding_core::ErrorKind;
    use geocoding_test_server::MockServer;

    fn client(server: &MockServer) -> PositionstackClient {
        PositionstackClient::with_base_url(PositionstackConfig::new("test-key"), server.base_url())
    }

    #[test]
    fn test_scheme_follows_https_flag() {
        let plain = PositionstackClient::new(PositionstackConfig::new("k"));
        assert_eq!(plain.base_url(), "http://api.positionstack.com/v1");

        let secure = PositionstackClient::new(PositionstackConfig::new("k").with_https(true));
        assert_eq!(secure.base_url(), "https://api.positionstack.com/v1");
    }

    #[tokio::test]
    async fn test_forward_end_to_end() {
        let server = MockServer::start(
            200,
            r#"{"data": [{"latitude": 52.516, "longitude": 13.378, "label": "Pariser Platz 1, Berlin, Germany"}]}"#,
        )
        .await;

        let response = client(&server)
            .forward(&ForwardParameters::new("Pariser Platz 1 Berlin"))
            .await
            .unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].latitude, Some(52.516));
        let requests = server.requests();
        assert_eq!(requests[0].path(), "/forward");
        assert_eq!(
            requests[0].query(),
            Some("query=Pariser+Platz+1+Berlin&output=json&access_key=test-key")
        );
    }

    #[tokio::test]
    async fn test_reverse_by_ip() {
        let server = MockServer::start(200, r#"{"data": []}"#).await;

        let params = ReverseParameters::new(ReverseQuery::Ip("8.8.8.8".parse().unwrap()));
        let response = client(&server).reverse(&params).await.unwrap();

        assert!(response.data.is_empty());
        assert_eq!(server.requests()[0].path(), "/reverse");
    }

    #[tokio::test]
    async fn test_invalid_access_key() {
        let server = MockServer::start(
            401,
            r#"{"error": {"code": "invalid_access_key", "message": "You have not supplied a valid API Access Key."}}"#,
        )
        .await;

        let err = client(&server)
            .forward(&ForwardParameters::new("Berlin"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Status);
        assert_eq!(err.status_code(), Some(401));
        assert!(err.message().contains("invalid_access_key"));
    }
}
