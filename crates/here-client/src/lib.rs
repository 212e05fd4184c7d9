//! Rust client for the HERE Geocoding & Search API (v7)
//!
//! # Example
//!
//! ```no_run
//! use here_client::{Coordinate, DiscoverParameters, HereClient, HereConfig};
//!
//! # async fn example() -> geocoding_core::Result<()> {
//! let client = HereClient::new(HereConfig::from_env()?);
//! let params = DiscoverParameters::new("coffee", Coordinate::new(52.5308, 13.3847));
//! for item in client.discover(&params).await?.items {
//!     println!("{} ({:?} m)", item.title, item.distance);
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

pub use client::HereClient;
pub use config::HereConfig;
pub use geocoding_core::{GeocodingError, Result};
pub use geometry::{AreaFilter, BoundingBox, Coordinate};
pub use params::{
    AutocompleteParameters, AutosuggestParameters, BrowseParameters, DiscoverParameters,
    GeocodeParameters, LookupParameters, PostalCodeMode, ResultTypeFilter,
    ReverseGeocodeParameters, ShowField,
};
pub use types::{Address, Item, ItemsResponse, ResultType};
