use std::fmt;

use geocoding_core::config::{env_flag, env_var, redact};
use geocoding_core::{Provider, Result};

/// positionstack access key
///
/// HTTPS is only available on paid plans, so it is off unless enabled.
#[derive(Clone)]
pub struct PositionstackConfig {
    access_key: String,
    use_https: bool,
}

impl PositionstackConfig {
    pub const ACCESS_KEY_VAR: &'static str = "POSITIONSTACK_ACCESS_KEY";
    pub const HTTPS_VAR: &'static str = "POSITIONSTACK_HTTPS";

    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            use_https: false,
        }
    }

    pub fn with_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Read `POSITIONSTACK_ACCESS_KEY` and the optional `POSITIONSTACK_HTTPS` flag
    pub fn from_env() -> Result<Self> {
        let access_key = env_var(Provider::Positionstack, Self::ACCESS_KEY_VAR)?;
        Ok(Self::new(access_key).with_https(env_flag(Self::HTTPS_VAR, false)))
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn use_https(&self) -> bool {
        self.use_https
    }
}

impl fmt::Debug for PositionstackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionstackConfig")
            .field("access_key", &redact(&self.access_key))
            .field("use_https", &self.use_https)
            .finish()
    }
}
