use std::fmt;

use geocoding_core::config::{env_var, redact};
use geocoding_core::{Provider, Result};

/// Bing Maps credentials
#[derive(Clone)]
pub struct BingConfig {
    api_key: String,
}

impl BingConfig {
    pub const API_KEY_VAR: &'static str = "BING_MAPS_KEY";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Read the key from `BING_MAPS_KEY`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(env_var(Provider::Bing, Self::API_KEY_VAR)?))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for BingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BingConfig")
            .field("api_key", &redact(&self.api_key))
            .finish()
    }
}
