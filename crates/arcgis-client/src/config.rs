use std::fmt;

use geocoding_core::config::{env_var, redact};
use geocoding_core::{GeocodingError, Provider, Result};

/// How requests are authorised
#[derive(Clone)]
pub enum ArcGisCredential {
    /// Long-lived API key sent as `token`
    ApiKey(String),
    /// OAuth app credentials exchanged for a short-lived access token
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
}

impl fmt::Debug for ArcGisCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(key) => f.debug_tuple("ApiKey").field(&redact(key)).finish(),
            Self::ClientCredentials { client_id, client_secret } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .field("client_secret", &redact(client_secret))
                .finish(),
        }
    }
}

/// ArcGIS location services credentials
#[derive(Debug, Clone)]
pub struct ArcGisConfig {
    credential: ArcGisCredential,
}

impl ArcGisConfig {
    pub const API_KEY_VAR: &'static str = "ARCGIS_API_KEY";
    pub const CLIENT_ID_VAR: &'static str = "ARCGIS_CLIENT_ID";
    pub const CLIENT_SECRET_VAR: &'static str = "ARCGIS_CLIENT_SECRET";

    pub fn api_key(api_key: impl Into<String>) -> Self {
        Self {
            credential: ArcGisCredential::ApiKey(api_key.into()),
        }
    }

    pub fn client_credentials(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            credential: ArcGisCredential::ClientCredentials {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
            },
        }
    }

    /// Use `ARCGIS_API_KEY` when set, otherwise `ARCGIS_CLIENT_ID` and `ARCGIS_CLIENT_SECRET`
    pub fn from_env() -> Result<Self> {
        if let Ok(key) = env_var(Provider::ArcGis, Self::API_KEY_VAR) {
            return Ok(Self::api_key(key));
        }
        match (
            env_var(Provider::ArcGis, Self::CLIENT_ID_VAR),
            env_var(Provider::ArcGis, Self::CLIENT_SECRET_VAR),
        ) {
            (Ok(id), Ok(secret)) => Ok(Self::client_credentials(id, secret)),
            _ => Err(GeocodingError::config(
                Provider::ArcGis,
                format!(
                    "set {} or both {} and {}",
                    Self::API_KEY_VAR,
                    Self::CLIENT_ID_VAR,
                    Self::CLIENT_SECRET_VAR
                ),
            )),
        }
    }

    pub fn credential(&self) -> &ArcGisCredential {
        &self.credential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ArcGisConfig::client_credentials("my-app", "super-secret-value");
        let debug = format!("{config:?}");
        assert!(debug.contains("my-app"));
        assert!(!debug.contains("super-secret-value"));

        let debug = format!("{:?}", ArcGisConfig::api_key("AAPK1234567890"));
        assert!(!debug.contains("AAPK1234567890"));
    }
}
