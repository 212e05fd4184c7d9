//! ArcGIS HTTP client with OAuth token caching

use chrono::{DateTime, Duration, Utc};
use geocoding_core::http::{default_http_client, fetch_text, parse_json};
use geocoding_core::{GeocodingError, Provider, Result};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use url::Url;

use crate::config::{ArcGisConfig, ArcGisCredential};
use crate::params::{FindAddressCandidatesParameters, ReverseGeocodeParameters, SuggestParameters};
use crate::query;
use crate::types::{
    ErrorProbe, FindAddressCandidatesResponse, ReverseGeocodeResponse, SuggestResponse,
    TokenResponse,
};

const PROVIDER: Provider = Provider::ArcGis;

/// Tokens this close to expiry are exchanged again
const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.expires_at
            .checked_sub_signed(Duration::seconds(REFRESH_MARGIN_SECS))
            .is_some_and(|refresh_at| refresh_at > now)
    }
}

/// `now + expires_in` seconds; negative lifetimes count as already expired
fn expiry_after(now: DateTime<Utc>, expires_in: i64) -> Result<DateTime<Utc>> {
    Duration::try_seconds(expires_in.max(0))
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| {
            GeocodingError::api(
                PROVIDER,
                format!("token expires_in {expires_in} is out of range"),
            )
        })
}

/// Client for the ArcGIS World Geocoding Service
///
/// With client credentials the first request exchanges them for an access
/// token, which is reused until it nears expiry.
pub struct ArcGisClient {
    http: reqwest::Client,
    config: ArcGisConfig,
    base_url: String,
    token_url: String,
    token: Mutex<Option<AccessToken>>,
}

impl ArcGisClient {
    pub const BASE_URL: &'static str =
        "https://geocode-api.arcgis.com/arcgis/rest/services/World/GeocodeServer";
    pub const TOKEN_URL: &'static str = "https://www.arcgis.com/sharing/rest/oauth2/token";

    pub fn new(config: ArcGisConfig) -> Self {
        Self::with_base_url(config, Self::BASE_URL)
    }

    pub fn with_base_url(config: ArcGisConfig, base_url: &str) -> Self {
        Self::with_http_client(config, base_url, default_http_client())
    }

    pub fn with_http_client(config: ArcGisConfig, base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            config,
            base_url: base_url.to_string(),
            token_url: Self::TOKEN_URL.to_string(),
            token: Mutex::new(None),
        }
    }

    /// Override the OAuth token endpoint
    pub fn with_token_url(mut self, token_url: &str) -> Self {
        self.token_url = token_url.to_string();
        self
    }

    pub async fn find_address_candidates(
        &self,
        params: &FindAddressCandidatesParameters,
    ) -> Result<FindAddressCandidatesResponse> {
        // Reject invalid parameters before any token exchange
        query::find_address_candidates_url(&self.base_url, params, "")?;
        let token = self.token().await?;
        let url = query::find_address_candidates_url(&self.base_url, params, &token)?;
        self.get("find_address_candidates", url).await
    }

    pub async fn reverse_geocode(
        &self,
        params: &ReverseGeocodeParameters,
    ) -> Result<ReverseGeocodeResponse> {
        query::reverse_geocode_url(&self.base_url, params, "")?;
        let token = self.token().await?;
        let url = query::reverse_geocode_url(&self.base_url, params, &token)?;
        self.get("reverse_geocode", url).await
    }

    /// Type-ahead suggestions; feed `magic_key` back into
    /// [`find_address_candidates`](Self::find_address_candidates)
    pub async fn suggest(&self, params: &SuggestParameters) -> Result<SuggestResponse> {
        query::suggest_url(&self.base_url, params, "")?;
        let token = self.token().await?;
        let url = query::suggest_url(&self.base_url, params, &token)?;
        self.get("suggest", url).await
    }

    /// The API key, or a cached or freshly exchanged access token
    async fn token(&self) -> Result<String> {
        let (client_id, client_secret) = match self.config.credential() {
            ArcGisCredential::ApiKey(key) => return Ok(key.clone()),
            ArcGisCredential::ClientCredentials {
                client_id,
                client_secret,
            } => (client_id, client_secret),
        };

        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref().filter(|t| t.is_usable(Utc::now())) {
            return Ok(token.value.clone());
        }

        let url = query::token_url(&self.token_url, client_id, client_secret)?;
        let response: TokenResponse = self.get("token", url).await?;
        debug!(
            provider = %PROVIDER,
            expires_in = response.expires_in,
            "Exchanged client credentials for access token"
        );

        let token = AccessToken {
            expires_at: expiry_after(Utc::now(), response.expires_in)?,
            value: response.access_token,
        };
        let value = token.value.clone();
        *slot = Some(token);
        Ok(value)
    }

    async fn get<T: DeserializeOwned>(&self, operation: &'static str, url: Url) -> Result<T> {
        let body = fetch_text(&self.http, PROVIDER, operation, self.http.get(url)).await?;

        let probe: ErrorProbe = parse_json(PROVIDER, &body)?;
        if let Some(error) = probe.error {
            warn!(
                provider = %PROVIDER,
                operation,
                code = error.code,
                message = %error.message,
                "Provider reported an error"
            );
            let mut message = format!("{}: {}", error.code, error.message);
            if !error.details.is_empty() {
                message.push_str(&format!(" ({})", error.details.join("; ")));
            }
            return Err(GeocodingError::api(PROVIDER, message));
        }

        parse_json(PROVIDER, &body)
    }
}
