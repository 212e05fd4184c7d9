use std::fmt;

use geocoding_core::config::{env_var, redact};
use geocoding_core::{Provider, Result};

/// Radar publishable or secret key, sent in the `Authorization` header
#[derive(Clone)]
pub struct RadarConfig {
    api_key: String,
}

impl RadarConfig {
    pub const API_KEY_VAR: &'static str = "RADAR_API_KEY";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Read the key from `RADAR_API_KEY`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(env_var(Provider::Radar, Self::API_KEY_VAR)?))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for RadarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadarConfig")
            .field("api_key", &redact(&self.api_key))
            .finish()
    }
}
