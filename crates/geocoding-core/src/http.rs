//! HTTP plumbing: client construction and the single GET-and-parse path

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{GeocodingError, Provider, Result};

const DEFAULT_USER_AGENT: &str = concat!("geocoding-clients-rs/", env!("CARGO_PKG_VERSION"));

/// Default request timeout for provider clients
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the reqwest client used by provider clients when none is supplied
pub fn default_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .expect("Failed to create HTTP client")
}

/// Send `request`, require a success status and return the body text
pub async fn fetch_text(
    client: &reqwest::Client,
    provider: Provider,
    operation: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<String> {
    let request = request
        .header(reqwest::header::ACCEPT, "application/json")
        .build()
        .map_err(|e| GeocodingError::http(provider, e))?;

    // Only the path is logged; the query string carries the credential
    debug!(
        provider = %provider,
        operation,
        path = request.url().path(),
        "Sending geocoding request"
    );

    let started = Instant::now();
    let response = client
        .execute(request)
        .await
        .map_err(|e| GeocodingError::http(provider, e))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GeocodingError::http(provider, e))?;

    debug!(
        provider = %provider,
        operation,
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        bytes = body.len(),
        "Received geocoding response"
    );

    if !status.is_success() {
        warn!(provider = %provider, operation, status = status.as_u16(), "Provider returned error status");
        return Err(GeocodingError::status(provider, status, &body));
    }

    Ok(body)
}

/// Send `request` and deserialize the JSON body into `T`
pub async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    provider: Provider,
    operation: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<T> {
    let body = fetch_text(client, provider, operation, request).await?;
    parse_json(provider, &body)
}

/// Deserialize a response body, tagging failures with the provider
pub fn parse_json<T: DeserializeOwned>(provider: Provider, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| GeocodingError::json(provider, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use geocoding_test_server::MockServer;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Envelope {
        code: u16,
        items: Vec<String>,
    }

    #[tokio::test]
    async fn test_fetch_json_parses_success_body() {
        let server = MockServer::start(200, r#"{"code":200,"items":["a","b"]}"#).await;
        let client = default_http_client();
        let url = format!("{}/v1/geocode?q=x", server.base_url());

        let data: Envelope = fetch_json(&client, Provider::Here, "geocode", client.get(&url))
            .await
            .unwrap();

        assert_eq!(data.code, 200);
        assert_eq!(data.items, vec!["a", "b"]);
        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path_and_query, "/v1/geocode?q=x");
    }

    #[tokio::test]
    async fn test_fetch_json_reports_status() {
        let server = MockServer::start(403, r#"{"message":"denied"}"#).await;
        let client = default_http_client();

        let err = fetch_json::<Envelope>(
            &client,
            Provider::Radar,
            "forward",
            client.get(server.base_url()),
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Status);
        assert_eq!(err.status_code(), Some(403));
        assert!(err.message().contains("denied"));
    }

    #[tokio::test]
    async fn test_fetch_json_reports_malformed_body() {
        let server = MockServer::start(200, r#"{"code":"oops"}"#).await;
        let client = default_http_client();

        let err = fetch_json::<Envelope>(
            &client,
            Provider::Bing,
            "geocode",
            client.get(server.base_url()),
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Json);
        assert_eq!(err.provider(), Provider::Bing);
    }

    #[tokio::test]
    async fn test_fetch_json_reports_transport_failure() {
        let client = default_http_client();
        // Port 9 (discard) on loopback is not expected to accept connections
        let err = fetch_json::<Envelope>(
            &client,
            Provider::MapQuest,
            "address",
            client.get("http://127.0.0.1:9/"),
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Http);
    }
}
