//! Request parameters for the address and reverse endpoints

use geocoding_core::wire_enum;

use crate::geometry::{BoundingBox, Coordinate};

wire_enum! {
    /// International address parsing mode
    pub enum IntlMode {
        /// Structured input split across five address fields
        FiveBox => "5BOX",
        /// Single-line input
        OneBox => "1BOX",
    }
}

/// `GET /address`
#[derive(Debug, Clone, Default)]
pub struct GeocodeParameters {
    /// Required single-line address
    pub location: String,
    /// Preferred area; results outside it are still returned
    pub bounding_box: Option<BoundingBox>,
    pub ignore_lat_lng_input: Option<bool>,
    /// `-1` for no limit, otherwise at least 1
    pub max_results: Option<i32>,
    pub thumb_maps: Option<bool>,
    pub intl_mode: Option<IntlMode>,
}

impl GeocodeParameters {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }
}

/// `GET /reverse`
#[derive(Debug, Clone, Default)]
pub struct ReverseGeocodeParameters {
    /// Required
    pub coordinate: Option<Coordinate>,
    pub include_road_metadata: Option<bool>,
    pub include_nearest_intersection: Option<bool>,
    pub thumb_maps: Option<bool>,
}

impl ReverseGeocodeParameters {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
            ..Default::default()
        }
    }
}
