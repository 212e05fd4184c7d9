//! Response models
//!
//! GeocodeServer answers failures with HTTP 200 and an `error` object, so
//! every body is probed with [`ErrorProbe`] before it is parsed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geometry::{Extent, Point, SpatialReference};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindAddressCandidatesResponse {
    pub spatial_reference: Option<SpatialReference>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Candidate {
    pub address: String,
    pub location: Point,
    /// 0 to 100
    pub score: f64,
    /// Whatever `outFields` asked for
    #[serde(default)]
    pub attributes: Map<String, Value>,
    pub extent: Option<Extent>,
}

impl Candidate {
    /// String attribute such as `Addr_type` or `Match_addr`
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReverseGeocodeResponse {
    pub address: ReverseAddress,
    pub location: ReverseLocation,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReverseAddress {
    #[serde(rename = "Match_addr")]
    pub match_addr: Option<String>,
    #[serde(rename = "LongLabel")]
    pub long_label: Option<String>,
    #[serde(rename = "ShortLabel")]
    pub short_label: Option<String>,
    #[serde(rename = "Addr_type")]
    pub addr_type: Option<String>,
    #[serde(rename = "Type")]
    pub place_type: Option<String>,
    #[serde(rename = "PlaceName")]
    pub place_name: Option<String>,
    #[serde(rename = "AddNum")]
    pub add_num: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "Neighborhood")]
    pub neighborhood: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "Subregion")]
    pub subregion: Option<String>,
    #[serde(rename = "Region")]
    pub region: Option<String>,
    #[serde(rename = "RegionAbbr")]
    pub region_abbr: Option<String>,
    #[serde(rename = "Postal")]
    pub postal: Option<String>,
    #[serde(rename = "PostalExt")]
    pub postal_ext: Option<String>,
    #[serde(rename = "CountryCode")]
    pub country_code: Option<String>,
    #[serde(rename = "CntryName")]
    pub country_name: Option<String>,
}

/// Reverse geocode location, with the spatial reference inline
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseLocation {
    pub x: f64,
    pub y: f64,
    pub spatial_reference: Option<SpatialReference>,
}

impl ReverseLocation {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub text: String,
    /// Pass back as `magicKey` to `findAddressCandidates`
    pub magic_key: String,
    #[serde(default)]
    pub is_collection: bool,
}

/// In-band error object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorProbe {
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    /// Seconds
    pub expires_in: i64,
}
