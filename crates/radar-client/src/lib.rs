//! Rust client for the Radar geocoding and search APIs
//!
//! # Example
//!
//! ```no_run
//! use radar_client::{Coordinate, RadarClient, RadarConfig, ReverseGeocodeParameters};
//!
//! # async fn example() -> geocoding_core::Result<()> {
//! let client = RadarClient::new(RadarConfig::from_env()?);
//! let params = ReverseGeocodeParameters::new(Coordinate::new(40.70390, -73.98670));
//! for address in client.reverse_geocode(&params).await?.addresses {
//!     println!("{:?}", address.formatted_address);
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

pub use client::RadarClient;
pub use config::RadarConfig;
pub use geocoding_core::{GeocodingError, Result};
pub use geometry::{Coordinate, Point, Position};
pub use params::{
    AutocompleteParameters, ForwardGeocodeParameters, IpGeocodeParameters, Layer,
    ReverseGeocodeParameters, SearchPlacesParameters,
};
pub use types::{
    Address, AddressesResponse, Chain, Confidence, IpGeocodeResponse, Meta, Place, PlacesResponse,
};
