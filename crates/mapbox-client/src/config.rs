use std::fmt;

use geocoding_core::config::{env_var, redact};
use geocoding_core::{Provider, Result};

/// MapBox access token
#[derive(Clone)]
pub struct MapBoxConfig {
    access_token: String,
}

impl MapBoxConfig {
    pub const ACCESS_TOKEN_VAR: &'static str = "MAPBOX_ACCESS_TOKEN";

    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    /// Read the token from `MAPBOX_ACCESS_TOKEN`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(env_var(Provider::MapBox, Self::ACCESS_TOKEN_VAR)?))
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for MapBoxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapBoxConfig")
            .field("access_token", &redact(&self.access_token))
            .finish()
    }
}
