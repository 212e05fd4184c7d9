//! Rust client for the positionstack geocoding API
//!
//! # Example
//!
//! ```no_run
//! use positionstack_client::{
//!     Coordinate, PositionstackClient, PositionstackConfig, ReverseParameters, ReverseQuery,
//! };
//!
//! # async fn example() -> geocoding_core::Result<()> {
//! let client = PositionstackClient::new(PositionstackConfig::from_env()?);
//! let params = ReverseParameters::new(ReverseQuery::Coordinate(Coordinate::new(40.7638, -73.9729)));
//! for place in client.reverse(&params).await?.data {
//!     println!("{:?}", place.label);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
pub mod params;
pub mod query;
pub mod types;

pub use client::PositionstackClient;
pub use config::PositionstackConfig;
pub use geocoding_core::{GeocodingError, Result};
pub use params::{Coordinate, ForwardParameters, RequestOptions, ReverseParameters, ReverseQuery};
pub use types::{BboxModule, GeocodeResponse, Place, TimezoneModule};
