//! Rust client for the ArcGIS World Geocoding Service
//!
//! Authenticates with either an API key or OAuth client credentials; in the
//! latter case access tokens are exchanged on demand and cached until they
//! near expiry.
//!
//! # Example
//!
//! ```no_run
//! use arcgis_client::{ArcGisClient, ArcGisConfig, FindAddressCandidatesParameters};
//!
//! # async fn example() -> geocoding_core::Result<()> {
//! let client = ArcGisClient::new(ArcGisConfig::from_env()?);
//! let params = FindAddressCandidatesParameters {
//!     max_locations: Some(5),
//!     ..FindAddressCandidatesParameters::single_line("380 New York St, Redlands, CA")
//! };
//! for candidate in client.find_address_candidates(&params).await?.candidates {
//!     println!("{} ({})", candidate.address, candidate.score);
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

pub use client::ArcGisClient;
pub use config::{ArcGisConfig, ArcGisCredential};
pub use geocoding_core::{GeocodingError, Result};
pub use geometry::{Extent, Point, SpatialReference};
pub use params::{
    FeatureType, FindAddressCandidatesParameters, LocationType, ReverseGeocodeParameters,
    SuggestParameters,
};
pub use types::{
    ApiError, Candidate, FindAddressCandidatesResponse, ReverseAddress, ReverseGeocodeResponse,
    ReverseLocation, SuggestResponse, Suggestion,
};
