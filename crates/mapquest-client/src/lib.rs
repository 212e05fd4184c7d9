//! Rust client for the MapQuest Geocoding API
//!
//! The same endpoints are served from a licensed-data host and an open-data
//! host; [`MapQuestConfig::with_open_data`] picks between them.
//!
//! # Example
//!
//! ```no_run
//! use mapquest_client::{GeocodeParameters, MapQuestClient, MapQuestConfig};
//!
//! # async fn example() -> geocoding_core::Result<()> {
//! let client = MapQuestClient::new(MapQuestConfig::from_env()?);
//! let response = client
//!     .geocode(&GeocodeParameters::new("1555 Blake St, Denver, CO 80202"))
//!     .await?;
//! for location in response.locations() {
//!     println!("{:?}", location.lat_lng);
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

pub use client::MapQuestClient;
pub use config::MapQuestConfig;
pub use geocoding_core::{GeocodingError, Result};
pub use geometry::{BoundingBox, Coordinate};
pub use params::{GeocodeParameters, IntlMode, ReverseGeocodeParameters};
pub use types::{GeocodeResponse, GeocodeResult, Info, Location};
