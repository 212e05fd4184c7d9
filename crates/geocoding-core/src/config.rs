//! Environment lookups used by the per-provider `from_env` constructors

use std::env;

use crate::error::{GeocodingError, Provider, Result};

/// Read a required, non-blank environment variable
pub fn env_var(provider: Provider, name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Ok(_) => Err(GeocodingError::config(provider, format!("{name} is empty"))),
        Err(_) => Err(GeocodingError::config(provider, format!("{name} is not set"))),
    }
}

/// Read an optional boolean flag (`1`/`true`/`yes`, case-insensitive); unset means `default`
pub fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}

/// Mask a secret for `Debug` output, keeping the last four characters
pub fn redact(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("****{tail}")
}
