//! Request parameters for the GeocodeServer operations

use geocoding_core::wire_enum;

use crate::geometry::{Extent, Point};

wire_enum! {
    /// Which point of a match to return
    pub enum LocationType {
        Rooftop => "rooftop",
        Street => "street",
    }
}

wire_enum! {
    /// Match types accepted by `featureTypes` on reverse geocode
    pub enum FeatureType {
        StreetInt => "StreetInt",
        DistanceMarker => "DistanceMarker",
        StreetAddress => "StreetAddress",
        StreetName => "StreetName",
        Poi => "POI",
        Subaddress => "Subaddress",
        PointAddress => "PointAddress",
        Postal => "Postal",
        Locality => "Locality",
    }
}

/// `GET /findAddressCandidates`
///
/// Either `single_line` or the structured `address` is required.
#[derive(Debug, Clone, Default)]
pub struct FindAddressCandidatesParameters {
    pub single_line: Option<String>,
    /// Street line of a structured address
    pub address: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub subregion: Option<String>,
    pub region: Option<String>,
    pub postal: Option<String>,
    pub postal_ext: Option<String>,
    pub country_code: Option<String>,
    pub category: Vec<String>,
    /// `*` for every field
    pub out_fields: Vec<String>,
    /// 1 to 50
    pub max_locations: Option<u32>,
    pub location: Option<Point>,
    pub search_extent: Option<Extent>,
    /// Required by the terms of use when results are stored
    pub for_storage: Option<bool>,
    pub lang_code: Option<String>,
    pub source_country: Option<String>,
    pub location_type: Option<LocationType>,
    /// Suggestion handle returned by `suggest`
    pub magic_key: Option<String>,
    pub out_sr: Option<u32>,
}

impl FindAddressCandidatesParameters {
    pub fn single_line(text: impl Into<String>) -> Self {
        Self {
            single_line: Some(text.into()),
            ..Default::default()
        }
    }
}

/// `GET /reverseGeocode`
#[derive(Debug, Clone, Default)]
pub struct ReverseGeocodeParameters {
    /// Required
    pub location: Option<Point>,
    pub feature_types: Vec<FeatureType>,
    pub location_type: Option<LocationType>,
    pub lang_code: Option<String>,
    pub out_sr: Option<u32>,
    pub for_storage: Option<bool>,
}

impl ReverseGeocodeParameters {
    pub fn new(location: Point) -> Self {
        Self {
            location: Some(location),
            ..Default::default()
        }
    }
}

/// `GET /suggest`
#[derive(Debug, Clone, Default)]
pub struct SuggestParameters {
    /// Required
    pub text: String,
    pub location: Option<Point>,
    pub category: Vec<String>,
    pub search_extent: Option<Extent>,
    /// 1 to 15
    pub max_suggestions: Option<u32>,
    pub country_code: Option<String>,
    pub preferred_label_values: Option<String>,
}

impl SuggestParameters {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}
