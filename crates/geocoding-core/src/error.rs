//! Error type shared by every provider client
//!
//! All providers report failures through [`GeocodingError`], tagged with the
//! [`Provider`] that produced it and an [`ErrorKind`] describing where in the
//! request lifecycle it happened.

use std::fmt;

/// Boxed cause carried by a [`GeocodingError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Geocoding provider an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    ArcGis,
    Bing,
    Google,
    Here,
    MapBox,
    MapQuest,
    Positionstack,
    Radar,
}

impl Provider {
    /// Human readable provider name
    pub fn name(&self) -> &'static str {
        match self {
            Self::ArcGis => "ArcGIS",
            Self::Bing => "Bing",
            Self::Google => "Google",
            Self::Here => "HERE",
            Self::MapBox => "MapBox",
            Self::MapQuest => "MapQuest",
            Self::Positionstack => "Positionstack",
            Self::Radar => "Radar",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of a [`GeocodingError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied a missing or out-of-range parameter; raised before any I/O
    InvalidArgument,
    /// Client configuration is missing or malformed
    Config,
    /// Transport failure (DNS, connect, timeout, body read)
    Http,
    /// Provider answered with a non-success HTTP status
    Status,
    /// Response body did not match the expected JSON shape
    Json,
    /// Provider reported an error inside a successful response
    Api,
}

impl ErrorKind {
    fn label(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::Config => "configuration error",
            Self::Http => "HTTP error",
            Self::Status => "unexpected status",
            Self::Json => "JSON parse error",
            Self::Api => "API error",
        }
    }
}

/// Error returned by every provider client
#[derive(Debug)]
pub struct GeocodingError {
    provider: Provider,
    kind: ErrorKind,
    message: String,
    status: Option<u16>,
    source: Option<BoxError>,
}

impl GeocodingError {
    pub fn new(provider: Provider, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            provider,
            kind,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Attach the underlying cause
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// A required parameter was not supplied
    pub fn missing_field(provider: Provider, field: &str) -> Self {
        Self::new(
            provider,
            ErrorKind::InvalidArgument,
            format!("{field} is required"),
        )
    }

    /// A parameter was supplied but violates a constraint
    pub fn invalid_field(provider: Provider, field: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            provider,
            ErrorKind::InvalidArgument,
            format!("{field} {reason}"),
        )
    }

    pub fn config(provider: Provider, message: impl Into<String>) -> Self {
        Self::new(provider, ErrorKind::Config, message)
    }

    pub fn http(provider: Provider, err: reqwest::Error) -> Self {
        Self::new(provider, ErrorKind::Http, err.to_string()).with_source(err)
    }

    pub fn status(provider: Provider, status: reqwest::StatusCode, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("{provider} returned status {status}")
        } else {
            format!("{provider} returned status {status}: {}", truncate(body, 512))
        };
        let mut err = Self::new(provider, ErrorKind::Status, message);
        err.status = Some(status.as_u16());
        err
    }

    pub fn json(provider: Provider, err: serde_json::Error) -> Self {
        Self::new(provider, ErrorKind::Json, err.to_string()).with_source(err)
    }

    pub fn api(provider: Provider, message: impl Into<String>) -> Self {
        Self::new(provider, ErrorKind::Api, message)
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status code, for [`ErrorKind::Status`] errors
    pub fn status_code(&self) -> Option<u16> {
        self.status
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind == ErrorKind::InvalidArgument
    }
}

impl fmt::Display for GeocodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.provider, self.kind.label(), self.message)
    }
}

impl std::error::Error for GeocodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Result type shared by all provider clients
pub type Result<T> = std::result::Result<T, GeocodingError>;
