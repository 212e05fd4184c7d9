//! Rust client for the Bing Maps REST API
//!
//! Covers the Locations API (query, structured address and point lookups)
//! and Autosuggest.
//!
//! # Example
//!
//! ```no_run
//! use bing_client::{BingClient, BingConfig, GeocodingParameters};
//!
//! # async fn example() -> geocoding_core::Result<()> {
//! let client = BingClient::new(BingConfig::from_env()?);
//! let response = client
//!     .geocode(&GeocodingParameters::new("1 Microsoft Way Redmond WA"))
//!     .await?;
//! for location in response.resources() {
//!     println!("{:?}", location.name);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
pub mod geometry;
pub mod params;
pub mod query;
pub mod types;

pub use client::BingClient;
pub use config::BingConfig;
pub use geocoding_core::{GeocodingError, Result};
pub use geometry::{BoundingBox, Circle, Coordinate};
pub use params::{
    AddressParameters, AutosuggestEntityType, AutosuggestParameters, EntityType,
    GeocodingParameters, ReverseGeocodingParameters,
};
pub use types::{
    Address, AutosuggestResponse, BingResponse, Confidence, Location, LocationResponse, MatchCode,
};
