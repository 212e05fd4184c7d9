//! Rust client for the MapBox Geocoding API (v5)
//!
//! Coordinates are longitude-first throughout. Features and their context
//! entries expose every returned language through [`LocalizedNames`].
//!
//! # Example
//!
//! ```no_run
//! use mapbox_client::{ForwardGeocodingParameters, MapBoxClient, MapBoxConfig};
//!
//! # async fn example() -> geocoding_core::Result<()> {
//! let client = MapBoxClient::new(MapBoxConfig::from_env()?);
//! let params = ForwardGeocodingParameters {
//!     languages: vec!["en".into(), "fr".into()],
//!     ..ForwardGeocodingParameters::new("Paris")
//! };
//! for feature in client.forward_geocode(&params).await?.features {
//!     for name in feature.names.records() {
//!         println!("{:?}: {:?}", name.locale, name.place_name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
pub mod context;
pub mod geometry;
pub mod params;
pub mod query;
pub mod types;

pub use client::MapBoxClient;
pub use config::MapBoxConfig;
pub use context::{LocalizedNames, LocalizedText};
pub use geocoding_core::{GeocodingError, Result};
pub use geometry::{BoundingBox, Coordinate};
pub use params::{
    Endpoint, FeatureType, ForwardGeocodingParameters, Proximity, ReverseGeocodingParameters,
    ReverseMode,
};
pub use types::{ContextEntry, Feature, FeatureCollection, Geometry, Properties};
