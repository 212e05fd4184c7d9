//! Response models

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// `meta` block present on every response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Meta {
    pub code: u16,
    pub message: Option<String>,
}

/// Forward, reverse and autocomplete responses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddressesResponse {
    pub meta: Meta,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// IP geocode response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IpGeocodeResponse {
    pub meta: Meta,
    pub address: Option<Address>,
    pub ip: Option<String>,
    /// Whether the IP is a known proxy
    #[serde(default)]
    pub proxy: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlacesResponse {
    pub meta: Meta,
    #[serde(default)]
    pub places: Vec<Place>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Exact,
    Interpolated,
    Fallback,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub geometry: Option<Point>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub country_flag: Option<String>,
    pub county: Option<String>,
    pub city: Option<String>,
    pub borough: Option<String>,
    pub neighborhood: Option<String>,
    pub state: Option<String>,
    pub state_code: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub unit: Option<String>,
    pub layer: Option<String>,
    pub formatted_address: Option<String>,
    pub address_label: Option<String>,
    pub place_label: Option<String>,
    /// Meters from `near` (autocomplete) or the queried point (reverse)
    pub distance: Option<f64>,
    pub confidence: Option<Confidence>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Place {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub location: Point,
    #[serde(default)]
    pub categories: Vec<String>,
    pub chain: Option<Chain>,
    pub group: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub name: String,
    pub slug: String,
    pub external_id: Option<String>,
    pub metadata: Option<serde_json::Value>,
}
