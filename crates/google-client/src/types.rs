//! Response models for the Geocoding and Places APIs
//!
//! These structs mirror Google's JSON. Every response carries a `status`
//! and, when something went wrong, an `error_message`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, LatLng};

/// Top-level status code shared by all Google Maps web services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    ZeroResults,
    NotFound,
    OverDailyLimit,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    #[serde(other)]
    Other,
}

impl Status {
    /// `OK` and `ZERO_RESULTS` are successful replies; everything else is an error
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok | Self::ZeroResults)
    }

    /// Google's spelling, e.g. `REQUEST_DENIED`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::NotFound => "NOT_FOUND",
            Self::OverDailyLimit => "OVER_DAILY_LIMIT",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status accessors shared by every response type
pub trait GoogleResponse {
    fn status(&self) -> Status;
    fn error_message(&self) -> Option<&str>;
}

macro_rules! impl_google_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl GoogleResponse for $ty {
                fn status(&self) -> Status {
                    self.status
                }

                fn error_message(&self) -> Option<&str> {
                    self.error_message.as_deref()
                }
            }
        )+
    };
}

impl_google_response!(
    GeocodeResponse,
    FindPlaceResponse,
    PlacesSearchResponse,
    PlaceDetailsResponse,
    AutocompleteResponse,
);

/// Geocoding API response (forward and reverse)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub status: Status,
    pub error_message: Option<String>,
    /// Present on reverse geocodes
    pub plus_code: Option<PlusCode>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
    pub place_id: Option<String>,
    pub plus_code: Option<PlusCode>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub partial_match: bool,
    #[serde(default)]
    pub postcode_localities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Geometry {
    pub location: LatLng,
    pub location_type: Option<String>,
    pub viewport: Option<Bounds>,
    pub bounds: Option<Bounds>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlusCode {
    pub global_code: Option<String>,
    pub compound_code: Option<String>,
}

/// Find Place response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FindPlaceResponse {
    #[serde(default)]
    pub candidates: Vec<Place>,
    pub status: Status,
    pub error_message: Option<String>,
}

/// Nearby Search and Text Search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlacesSearchResponse {
    #[serde(default)]
    pub results: Vec<Place>,
    #[serde(default)]
    pub html_attributions: Vec<String>,
    pub next_page_token: Option<String>,
    pub status: Status,
    pub error_message: Option<String>,
}

/// Place Details response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaceDetailsResponse {
    pub result: Option<Place>,
    #[serde(default)]
    pub html_attributions: Vec<String>,
    pub status: Status,
    pub error_message: Option<String>,
}

/// A place as returned by Find Place, the searches and Place Details
///
/// Which fields are populated depends on the endpoint and the requested
/// `fields`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Place {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub vicinity: Option<String>,
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub types: Vec<String>,
    pub business_status: Option<String>,
    pub icon: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub price_level: Option<u8>,
    pub opening_hours: Option<OpeningHours>,
    pub formatted_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    pub website: Option<String>,
    pub url: Option<String>,
    pub utc_offset: Option<i32>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    pub plus_code: Option<PlusCode>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Review {
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    pub language: Option<String>,
    pub rating: Option<u8>,
    pub relative_time_description: Option<String>,
    pub text: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Photo {
    pub photo_reference: String,
    pub height: u32,
    pub width: u32,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

/// Place Autocomplete response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    pub status: Status,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Prediction {
    pub description: String,
    pub place_id: Option<String>,
    pub distance_meters: Option<u32>,
    #[serde(default)]
    pub matched_substrings: Vec<MatchedSubstring>,
    pub structured_formatting: Option<StructuredFormatting>,
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct MatchedSubstring {
    pub length: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StructuredFormatting {
    pub main_text: String,
    pub secondary_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Term {
    pub offset: u32,
    pub value: String,
}
