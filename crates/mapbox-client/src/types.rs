//! GeoJSON response models

use serde::{Deserialize, Serialize};

use crate::context::LocalizedNames;
use crate::geometry::{BoundingBox, Coordinate};

/// Top-level response for both forward and reverse geocoding
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    /// Search terms (forward) or `[lng, lat]` (reverse) as MapBox parsed them
    #[serde(default)]
    pub query: Vec<serde_json::Value>,
    #[serde(default)]
    pub features: Vec<Feature>,
    pub attribution: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Feature {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub place_type: Vec<String>,
    #[serde(default)]
    pub relevance: f64,
    /// House number, for address features
    pub address: Option<String>,
    #[serde(default)]
    pub properties: Properties,
    pub center: Option<Coordinate>,
    pub geometry: Option<Geometry>,
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub context: Vec<ContextEntry>,
    pub matching_text: Option<String>,
    pub matching_place_name: Option<String>,
    /// `text`, `place_name` and `language` in every returned locale
    #[serde(flatten)]
    pub names: LocalizedNames,
}

impl Feature {
    /// Default-language `text`
    pub fn text(&self) -> Option<&str> {
        self.names.text()
    }

    /// Default-language `place_name`
    pub fn place_name(&self) -> Option<&str> {
        self.names.place_name()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Properties {
    pub accuracy: Option<String>,
    pub address: Option<String>,
    pub category: Option<String>,
    pub maki: Option<String>,
    pub wikidata: Option<String>,
    pub short_code: Option<String>,
    pub landmark: Option<bool>,
    pub tel: Option<String>,
    pub foursquare: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Coordinate,
    /// Set when the address point was interpolated
    pub interpolated: Option<bool>,
}

/// One parent feature in a result's `context`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContextEntry {
    pub id: String,
    pub short_code: Option<String>,
    pub wikidata: Option<String>,
    #[serde(flatten)]
    pub names: LocalizedNames,
}

impl ContextEntry {
    pub fn text(&self) -> Option<&str> {
        self.names.text()
    }
}
