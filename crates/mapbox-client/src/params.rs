//! Request parameters for forward and reverse geocoding

use geocoding_core::wire_enum;

use crate::geometry::{BoundingBox, Coordinate};

wire_enum! {
    /// Geocoding dataset
    ///
    /// `mapbox.places-permanent` is required for storing results.
    pub enum Endpoint {
        Places => "mapbox.places",
        PlacesPermanent => "mapbox.places-permanent",
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::Places
    }
}

wire_enum! {
    /// Feature types accepted by the `types` filter
    pub enum FeatureType {
        Country => "country",
        Region => "region",
        Postcode => "postcode",
        District => "district",
        Place => "place",
        Locality => "locality",
        Neighborhood => "neighborhood",
        Address => "address",
        Poi => "poi",
    }
}

wire_enum! {
    pub enum ReverseMode {
        Distance => "distance",
        Score => "score",
    }
}

/// Bias results towards a point, or towards the caller's IP location
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Proximity {
    Coordinate(Coordinate),
    Ip,
}

impl Proximity {
    pub fn to_wire(&self) -> String {
        match self {
            Self::Coordinate(c) => c.to_wire(),
            Self::Ip => "ip".to_string(),
        }
    }
}

/// `GET /geocoding/v5/{endpoint}/{query}.json`
#[derive(Debug, Clone, Default)]
pub struct ForwardGeocodingParameters {
    /// Required
    pub query: String,
    pub endpoint: Endpoint,
    pub autocomplete: Option<bool>,
    pub bbox: Option<BoundingBox>,
    /// ISO 3166 alpha-2 codes
    pub countries: Vec<String>,
    pub fuzzy_match: Option<bool>,
    pub languages: Vec<String>,
    /// 1 to 10
    pub limit: Option<u32>,
    pub proximity: Option<Proximity>,
    pub routing: Option<bool>,
    pub types: Vec<FeatureType>,
    pub worldview: Option<String>,
}

impl ForwardGeocodingParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// `GET /geocoding/v5/{endpoint}/{lng},{lat}.json`
#[derive(Debug, Clone, Default)]
pub struct ReverseGeocodingParameters {
    /// Required
    pub coordinate: Option<Coordinate>,
    pub endpoint: Endpoint,
    pub countries: Vec<String>,
    pub languages: Vec<String>,
    /// 1 to 5; above 1 exactly one `types` entry must be given
    pub limit: Option<u32>,
    pub reverse_mode: Option<ReverseMode>,
    pub routing: Option<bool>,
    pub types: Vec<FeatureType>,
    pub worldview: Option<String>,
}

impl ReverseGeocodingParameters {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
            ..Default::default()
        }
    }
}
