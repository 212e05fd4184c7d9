use std::fmt;

use geocoding_core::config::{env_var, redact};
use geocoding_core::{Provider, Result};

/// Google Maps Platform API key
///
/// Built once at startup and handed to [`GoogleClient`](crate::GoogleClient);
/// it cannot be changed afterwards.
#[derive(Clone)]
pub struct GoogleConfig {
    api_key: String,
}

impl GoogleConfig {
    pub const API_KEY_VAR: &'static str = "GOOGLE_MAPS_API_KEY";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Read the key from `GOOGLE_MAPS_API_KEY`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(env_var(Provider::Google, Self::API_KEY_VAR)?))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("api_key", &redact(&self.api_key))
            .finish()
    }
}
