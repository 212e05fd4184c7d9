//! Response models for `/address` and `/reverse`

use serde::{Deserialize, Serialize};

use crate::geometry::Coordinate;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodeResponse {
    pub info: Info,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

impl GeocodeResponse {
    /// All locations across every result
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.results.iter().flat_map(|r| r.locations.iter())
    }
}

/// Request outcome; `statuscode` 0 means success
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Info {
    pub statuscode: i32,
    pub copyright: Option<Copyright>,
    #[serde(default)]
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Copyright {
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub image_alt_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResult {
    pub provided_location: Option<ProvidedLocation>,
    #[serde(default)]
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvidedLocation {
    pub location: Option<String>,
    pub lat_lng: Option<Coordinate>,
}

/// A matched location
///
/// `adminArea1` is the country, `adminArea3` the state, `adminArea4` the
/// county, `adminArea5` the city and `adminArea6` the neighborhood.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub street: Option<String>,
    pub admin_area6: Option<String>,
    pub admin_area6_type: Option<String>,
    pub admin_area5: Option<String>,
    pub admin_area5_type: Option<String>,
    pub admin_area4: Option<String>,
    pub admin_area4_type: Option<String>,
    pub admin_area3: Option<String>,
    pub admin_area3_type: Option<String>,
    pub admin_area1: Option<String>,
    pub admin_area1_type: Option<String>,
    pub postal_code: Option<String>,
    pub geocode_quality_code: Option<String>,
    pub geocode_quality: Option<String>,
    pub drag_point: Option<bool>,
    pub side_of_street: Option<String>,
    pub link_id: Option<String>,
    pub unknown_input: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub lat_lng: Option<Coordinate>,
    pub display_lat_lng: Option<Coordinate>,
    pub map_url: Option<String>,
    pub road_metadata: Option<RoadMetadata>,
    pub nearest_intersection: Option<NearestIntersection>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadMetadata {
    pub speed_limit_units: Option<String>,
    pub toll_road: Option<serde_json::Value>,
    pub speed_limit: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestIntersection {
    pub street_display_name: Option<String>,
    pub distance_meters: Option<String>,
    pub bearing: Option<String>,
    pub lat_lng: Option<Coordinate>,
}
