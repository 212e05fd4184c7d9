//! Request parameters for the Locations and Autosuggest endpoints

use geocoding_core::wire_enum;

use crate::geometry::{BoundingBox, Circle, Coordinate};

wire_enum! {
    /// Entity types accepted by `includeEntityTypes` on a reverse geocode
    pub enum EntityType {
        Address => "Address",
        Neighborhood => "Neighborhood",
        PopulatedPlace => "PopulatedPlace",
        Postcode1 => "Postcode1",
        AdminDivision1 => "AdminDivision1",
        AdminDivision2 => "AdminDivision2",
        CountryRegion => "CountryRegion",
    }
}

wire_enum! {
    /// Entity types accepted by `includeEntityTypes` on Autosuggest
    pub enum AutosuggestEntityType {
        Address => "Address",
        Place => "Place",
        Business => "Business",
    }
}

/// Free-form query: `GET /Locations?query=`
#[derive(Debug, Clone, Default)]
pub struct GeocodingParameters {
    /// Required
    pub query: String,
    /// 1 to 20
    pub max_results: Option<u32>,
    pub include_neighborhood: Option<bool>,
    /// Adds the two-letter ISO country code to each address
    pub include_country_iso2: bool,
    pub user_location: Option<Coordinate>,
    pub user_map_view: Option<BoundingBox>,
    pub user_ip: Option<String>,
    /// Culture code such as `en-US`
    pub culture: Option<String>,
}

impl GeocodingParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Structured address: `GET /Locations?addressLine=&locality=...`
///
/// At least one component must be set.
#[derive(Debug, Clone, Default)]
pub struct AddressParameters {
    pub address_line: Option<String>,
    pub locality: Option<String>,
    pub admin_district: Option<String>,
    pub postal_code: Option<String>,
    pub country_region: Option<String>,
    pub max_results: Option<u32>,
    pub include_neighborhood: Option<bool>,
    pub include_country_iso2: bool,
    pub user_location: Option<Coordinate>,
    pub culture: Option<String>,
}

/// Point lookup: `GET /Locations/{lat},{lng}`
#[derive(Debug, Clone, Default)]
pub struct ReverseGeocodingParameters {
    /// Required
    pub point: Option<Coordinate>,
    pub include_entity_types: Vec<EntityType>,
    pub include_neighborhood: Option<bool>,
    pub include_country_iso2: bool,
    pub verbose_place_names: Option<bool>,
    pub culture: Option<String>,
}

impl ReverseGeocodingParameters {
    pub fn new(point: Coordinate) -> Self {
        Self {
            point: Some(point),
            ..Default::default()
        }
    }
}

/// Type-ahead suggestions: `GET /Autosuggest`
#[derive(Debug, Clone, Default)]
pub struct AutosuggestParameters {
    /// Required
    pub query: String,
    pub user_location: Option<Circle>,
    pub user_circular_map_view: Option<Circle>,
    pub user_map_view: Option<BoundingBox>,
    /// 1 to 10
    pub max_results: Option<u32>,
    pub include_entity_types: Vec<AutosuggestEntityType>,
    pub culture: Option<String>,
    pub user_region: Option<String>,
    pub country_filter: Option<String>,
}

impl AutosuggestParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}
