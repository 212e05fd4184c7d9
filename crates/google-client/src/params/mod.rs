//! Request parameters for the Geocoding and Places APIs

pub mod geocoding;
pub mod places;

pub use geocoding::{
    AddressType, ComponentFilter, ComponentType, GeocodeParameters, LocationType,
    ReverseGeocodeParameters,
};
pub use places::{
    AutocompleteParameters, AutocompleteType, FindPlaceParameters, InputType, LocationBias,
    NearbySearchParameters, PlaceDetailsParameters, PlaceField, PlaceType, RankBy, ReviewsSort,
    TextSearchParameters,
};
