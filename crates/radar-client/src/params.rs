//! Request parameters for geocoding and search

use std::net::IpAddr;

use geocoding_core::wire_enum;

use crate::geometry::Coordinate;

wire_enum! {
    /// Result layers for geocoding and autocomplete
    pub enum Layer {
        Place => "place",
        Address => "address",
        PostalCode => "postalCode",
        Locality => "locality",
        County => "county",
        State => "state",
        Country => "country",
        /// All administrative layers
        Coarse => "coarse",
        /// Address and place layers
        Fine => "fine",
    }
}

/// `GET /geocode/forward`
#[derive(Debug, Clone, Default)]
pub struct ForwardGeocodeParameters {
    /// Required
    pub query: String,
    pub layers: Vec<Layer>,
    /// ISO 3166 alpha-2 codes
    pub countries: Vec<String>,
    pub lang: Option<String>,
}

impl ForwardGeocodeParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// `GET /geocode/reverse`
#[derive(Debug, Clone, Default)]
pub struct ReverseGeocodeParameters {
    /// Required
    pub coordinates: Option<Coordinate>,
    pub layers: Vec<Layer>,
    pub lang: Option<String>,
}

impl ReverseGeocodeParameters {
    pub fn new(coordinates: Coordinate) -> Self {
        Self {
            coordinates: Some(coordinates),
            ..Default::default()
        }
    }
}

/// `GET /geocode/ip`
///
/// Without an address Radar geocodes the IP the request came from.
#[derive(Debug, Clone, Default)]
pub struct IpGeocodeParameters {
    pub ip: Option<IpAddr>,
}

/// `GET /search/autocomplete`
#[derive(Debug, Clone, Default)]
pub struct AutocompleteParameters {
    /// Required
    pub query: String,
    pub near: Option<Coordinate>,
    pub layers: Vec<Layer>,
    /// 1 to 100
    pub limit: Option<u32>,
    pub country_code: Option<String>,
    pub lang: Option<String>,
    /// Return one result per unit for multi-unit addresses
    pub expand_units: Option<bool>,
}

impl AutocompleteParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// `GET /search/places`
///
/// At least one of `chains`, `categories` or `groups` is required.
#[derive(Debug, Clone, Default)]
pub struct SearchPlacesParameters {
    /// Required
    pub near: Option<Coordinate>,
    /// Meters, 1 to 10 000
    pub radius: Option<u32>,
    /// Chain slugs, e.g. `starbucks`
    pub chains: Vec<String>,
    pub categories: Vec<String>,
    pub groups: Vec<String>,
    /// 1 to 100
    pub limit: Option<u32>,
}

impl SearchPlacesParameters {
    pub fn new(near: Coordinate) -> Self {
        Self {
            near: Some(near),
            ..Default::default()
        }
    }
}
