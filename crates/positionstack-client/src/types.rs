//! Response models for `/forward` and `/reverse`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub data: Vec<Place>,
}

/// A matched place; fields depend on the match type
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Place {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub label: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub number: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    /// 0 to 1
    pub confidence: Option<f64>,
    pub region: Option<String>,
    pub region_code: Option<String>,
    pub county: Option<String>,
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
    pub neighbourhood: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub continent: Option<String>,
    pub map_url: Option<String>,
    /// Meters from the queried point (reverse only)
    pub distance: Option<f64>,
    pub country_module: Option<serde_json::Value>,
    pub sun_module: Option<serde_json::Value>,
    pub timezone_module: Option<TimezoneModule>,
    pub bbox_module: Option<BboxModule>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimezoneModule {
    pub name: Option<String>,
    pub offset_sec: Option<i32>,
    pub offset_string: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct BboxModule {
    pub min_latitude: f64,
    pub min_longitude: f64,
    pub max_latitude: f64,
    pub max_longitude: f64,
}
