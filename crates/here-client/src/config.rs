use std::fmt;

use geocoding_core::config::{env_var, redact};
use geocoding_core::{Provider, Result};

/// HERE platform API key
#[derive(Clone)]
pub struct HereConfig {
    api_key: String,
}

impl HereConfig {
    pub const API_KEY_VAR: &'static str = "HERE_API_KEY";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Read the key from `HERE_API_KEY`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(env_var(Provider::Here, Self::API_KEY_VAR)?))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for HereConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HereConfig")
            .field("api_key", &redact(&self.api_key))
            .finish()
    }
}
