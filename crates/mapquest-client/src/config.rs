use std::fmt;

use geocoding_core::config::{env_flag, env_var, redact};
use geocoding_core::{Provider, Result};

/// MapQuest key and data-source selection
#[derive(Clone)]
pub struct MapQuestConfig {
    api_key: String,
    use_open_data: bool,
}

impl MapQuestConfig {
    pub const API_KEY_VAR: &'static str = "MAPQUEST_API_KEY";
    pub const OPEN_DATA_VAR: &'static str = "MAPQUEST_OPEN_DATA";

    /// Licensed data by default
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            use_open_data: false,
        }
    }

    /// Query the OpenStreetMap-backed open data host instead of the licensed one
    pub fn with_open_data(mut self, use_open_data: bool) -> Self {
        self.use_open_data = use_open_data;
        self
    }

    /// Read `MAPQUEST_API_KEY` and the optional `MAPQUEST_OPEN_DATA` flag
    pub fn from_env() -> Result<Self> {
        let api_key = env_var(Provider::MapQuest, Self::API_KEY_VAR)?;
        Ok(Self::new(api_key).with_open_data(env_flag(Self::OPEN_DATA_VAR, false)))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn use_open_data(&self) -> bool {
        self.use_open_data
    }
}

impl fmt::Debug for MapQuestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapQuestConfig")
            .field("api_key", &redact(&self.api_key))
            .field("use_open_data", &self.use_open_data)
            .finish()
    }
}
