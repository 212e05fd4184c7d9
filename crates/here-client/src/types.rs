//! Response models shared by every HERE search endpoint

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingBox, Coordinate};

/// `{"items": [...]}`, returned by every endpoint except lookup
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Item>,
    /// Query term suggestions (autosuggest only)
    #[serde(default, rename = "queryTerms")]
    pub query_terms: Vec<QueryTerm>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultType {
    Place,
    Locality,
    Street,
    HouseNumber,
    IntersectionAdministrativeArea,
    Intersection,
    AdministrativeArea,
    AddressBlock,
    PostalCodePoint,
    ChainQuery,
    CategoryQuery,
    #[serde(other)]
    Unknown,
}

/// One result; which fields are set depends on the endpoint and `resultType`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub title: String,
    pub id: Option<String>,
    pub result_type: Option<ResultType>,
    pub house_number_type: Option<String>,
    pub locality_type: Option<String>,
    pub administrative_area_type: Option<String>,
    pub address: Option<Address>,
    pub position: Option<Coordinate>,
    #[serde(default)]
    pub access: Vec<Coordinate>,
    pub map_view: Option<BoundingBox>,
    /// Meters from the search position
    pub distance: Option<u64>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub food_types: Vec<Category>,
    #[serde(default)]
    pub chains: Vec<Chain>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub opening_hours: Vec<OpeningHours>,
    pub scoring: Option<Scoring>,
    /// Follow-up query for chain and category suggestions
    pub href: Option<String>,
    pub highlights: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub label: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub state_code: Option<String>,
    pub state: Option<String>,
    pub county: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub subdistrict: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub house_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Category {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Chain {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactValue {
    pub value: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Contact {
    #[serde(default)]
    pub phone: Vec<ContactValue>,
    #[serde(default)]
    pub mobile: Vec<ContactValue>,
    #[serde(default)]
    pub www: Vec<ContactValue>,
    #[serde(default)]
    pub email: Vec<ContactValue>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default)]
    pub text: Vec<String>,
    pub is_open: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoring {
    pub query_score: Option<f64>,
    /// Per-field match scores, shaped like the address
    pub field_score: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryTerm {
    pub term: String,
    pub replaces: Option<String>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}
