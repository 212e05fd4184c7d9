//! Shared plumbing for the geocoding provider clients
//!
//! Every provider crate builds its URLs with [`QueryWriter`], maps enums to
//! wire strings through [`WireValue`] (usually declared with [`wire_enum!`]),
//! sends requests through [`http::fetch_json`] and reports failures as a
//! provider-tagged [`GeocodingError`].

pub mod config;
pub mod error;
pub mod fixed;
pub mod http;
pub mod query;

pub use error::{BoxError, ErrorKind, GeocodingError, Provider, Result};
pub use query::{require_range, require_text, BoolStyle, QueryWriter, WireValue};
