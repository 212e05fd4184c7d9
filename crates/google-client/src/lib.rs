//! Rust client for the Google Maps Geocoding and Places APIs
//!
//! Google answers most failures with HTTP 200 and a non-`OK` `status` field;
//! the client turns those into [`GeocodingError`]s of kind `Api`, so a
//! successful call only ever carries `OK` or `ZERO_RESULTS`.
//!
//! # Example
//!
//! ```no_run
//! use google_client::{GoogleClient, GoogleConfig, NearbySearchParameters, LatLng, PlaceType};
//!
//! # async fn example() -> geocoding_core::Result<()> {
//! let client = GoogleClient::new(GoogleConfig::from_env()?);
//! let params = NearbySearchParameters {
//!     place_type: Some(PlaceType::Cafe),
//!     ..NearbySearchParameters::new(LatLng::new(-33.8670522, 151.1957362), 1500)
//! };
//! let response = client.nearby_search(&params).await?;
//! for place in &response.results {
//!     println!("{:?}", place.name);
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

pub use client::GoogleClient;
pub use config::GoogleConfig;
pub use geocoding_core::{GeocodingError, Result};
pub use geometry::{Bounds, LatLng};
pub use params::{
    AddressType, AutocompleteParameters, AutocompleteType, ComponentFilter, ComponentType,
    FindPlaceParameters, GeocodeParameters, InputType, LocationBias, LocationType,
    NearbySearchParameters, PlaceDetailsParameters, PlaceField, PlaceType, RankBy,
    ReverseGeocodeParameters, ReviewsSort, TextSearchParameters,
};
pub use types::{
    AutocompleteResponse, FindPlaceResponse, GeocodeResponse, GeocodeResult, GoogleResponse,
    Place, PlaceDetailsResponse, PlacesSearchResponse, Prediction, Status,
};
