//! Response models for the Bing Maps REST API
//!
//! Every endpoint answers with the same envelope; only the resource type
//! inside `resourceSets[].resources[]` differs.

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingBox, Coordinate};

/// Top-level Bing response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BingResponse<R> {
    pub authentication_result_code: Option<String>,
    pub brand_logo_uri: Option<String>,
    pub copyright: Option<String>,
    #[serde(default = "Vec::new")]
    pub resource_sets: Vec<ResourceSet<R>>,
    pub status_code: u16,
    pub status_description: Option<String>,
    pub trace_id: Option<String>,
    #[serde(default)]
    pub error_details: Vec<String>,
}

impl<R> BingResponse<R> {
    /// All resources across every resource set
    pub fn resources(&self) -> impl Iterator<Item = &R> {
        self.resource_sets.iter().flat_map(|set| set.resources.iter())
    }

    pub fn result_count(&self) -> usize {
        self.resource_sets.iter().map(|set| set.resources.len()).sum()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSet<R> {
    #[serde(default)]
    pub estimated_total: u32,
    #[serde(default = "Vec::new")]
    pub resources: Vec<R>,
}

/// Response of the Locations endpoints
pub type LocationResponse = BingResponse<Location>;

/// Response of the Autosuggest endpoint
pub type AutosuggestResponse = BingResponse<AutosuggestResource>;

/// One geocoded location
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(rename = "__type")]
    pub resource_type: Option<String>,
    pub bbox: Option<BoundingBox>,
    pub name: Option<String>,
    pub point: Option<Point>,
    pub address: Option<Address>,
    pub confidence: Option<Confidence>,
    pub entity_type: Option<String>,
    #[serde(default)]
    pub geocode_points: Vec<GeocodePoint>,
    #[serde(default)]
    pub match_codes: Vec<MatchCode>,
}

/// GeoJSON-style point with `[lat, lng]` coordinates
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Point {
    #[serde(rename = "type")]
    pub point_type: Option<String>,
    pub coordinates: Coordinate,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodePoint {
    #[serde(rename = "type")]
    pub point_type: Option<String>,
    pub coordinates: Coordinate,
    pub calculation_method: Option<String>,
    #[serde(default)]
    pub usage_types: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_line: Option<String>,
    pub neighborhood: Option<String>,
    pub locality: Option<String>,
    pub admin_district: Option<String>,
    pub admin_district2: Option<String>,
    pub postal_code: Option<String>,
    pub country_region: Option<String>,
    pub country_region_iso2: Option<String>,
    pub formatted_address: Option<String>,
    pub landmark: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum MatchCode {
    Good,
    Ambiguous,
    UpHierarchy,
    #[serde(other)]
    Unknown,
}

/// Autosuggest resource: a wrapper around the suggestion list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AutosuggestResource {
    #[serde(rename = "__type")]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub value: Vec<Suggestion>,
}

/// One Autosuggest entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Suggestion {
    /// `Address`, `Place` or `LocalBusiness`
    #[serde(rename = "__type")]
    pub suggestion_type: Option<String>,
    pub name: Option<String>,
    pub address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCATIONS_JSON: &str = r#"{
        "authenticationResultCode": "ValidCredentials",
        "brandLogoUri": "https://dev.virtualearth.net/Branding/logo_powered_by.png",
        "copyright": "Copyright © 2024 Microsoft",
        "resourceSets": [{
            "estimatedTotal": 1,
            "resources": [{
                "__type": "Location:http://schemas.microsoft.com/search/local/ws/rest/v1",
                "bbox": [47.636257744012461, -122.13735364288299, 47.643983179153814, -122.12206713944467],
                "name": "1 Microsoft Way, Redmond, WA 98052",
                "point": {"type": "Point", "coordinates": [47.640120461583138, -122.12971039116383]},
                "address": {
                    "addressLine": "1 Microsoft Way",
                    "adminDistrict": "WA",
                    "adminDistrict2": "King Co.",
                    "countryRegion": "United States",
                    "formattedAddress": "1 Microsoft Way, Redmond, WA 98052",
                    "locality": "Redmond",
                    "postalCode": "98052"
                },
                "confidence": "High",
                "entityType": "Address",
                "geocodePoints": [{
                    "type": "Point",
                    "coordinates": [47.640120461583138, -122.12971039116383],
                    "calculationMethod": "InterpolationOffset",
                    "usageTypes": ["Display"]
                }],
                "matchCodes": ["Good"]
            }]
        }],
        "statusCode": 200,
        "statusDescription": "OK",
        "traceId": "b0b1b2b3"
    }"#;

    #[test]
    fn test_location_response_deserialization() {
        let response: LocationResponse = serde_json::from_str(LOCATIONS_JSON).unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.result_count(), 1);

        let location = response.resources().next().unwrap();
        assert_eq!(location.confidence, Some(Confidence::High));
        assert_eq!(location.match_codes, vec![MatchCode::Good]);
        assert_eq!(location.entity_type.as_deref(), Some("Address"));

        let point = location.point.as_ref().unwrap();
        assert!((point.coordinates.latitude - 47.6401).abs() < 1e-3);
        assert!((point.coordinates.longitude + 122.1297).abs() < 1e-3);

        let bbox = location.bbox.unwrap();
        assert!(bbox.south < bbox.north);
        assert!(bbox.west < bbox.east);

        let address = location.address.as_ref().unwrap();
        assert_eq!(address.locality.as_deref(), Some("Redmond"));
        assert_eq!(address.admin_district2.as_deref(), Some("King Co."));
    }

    #[test]
    fn test_unknown_confidence_and_match_code() {
        let json = r#"{"confidence": "Sideways", "matchCodes": ["Odd"]}"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.confidence, Some(Confidence::Unknown));
        assert_eq!(location.match_codes, vec![MatchCode::Unknown]);
    }

    #[test]
    fn test_error_envelope_without_resource_sets() {
        let json = r#"{
            "authenticationResultCode": "InvalidCredentials",
            "errorDetails": ["Access was denied."],
            "statusCode": 401,
            "statusDescription": "Unauthorized"
        }"#;
        let response: LocationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status_code, 401);
        assert_eq!(response.result_count(), 0);
        assert_eq!(response.error_details, vec!["Access was denied."]);
    }

    #[test]
    fn test_bad_bbox_length_fails() {
        let json = r#"{"bbox": [47.6, -122.1, 47.7]}"#;
        let err = serde_json::from_str::<Location>(json).unwrap_err();
        assert!(err.to_string().contains("[south, west, north, east]"));
    }

    #[test]
    fn test_autosuggest_deserialization() {
        let json = r#"{
            "resourceSets": [{
                "estimatedTotal": 1,
                "resources": [{
                    "__type": "Autosuggest:http://schemas.microsoft.com/search/local/ws/rest/v1",
                    "value": [
                        {"__type": "LocalBusiness", "name": "Space Needle",
                         "address": {"locality": "Seattle", "formattedAddress": "400 Broad St, Seattle, WA 98109"}},
                        {"__type": "Address", "address": {"addressLine": "Space Needle Dr"}}
                    ]
                }]
            }],
            "statusCode": 200
        }"#;
        let response: AutosuggestResponse = serde_json::from_str(json).unwrap();
        let resource = response.resources().next().unwrap();
        assert_eq!(resource.value.len(), 2);
        assert_eq!(resource.value[0].name.as_deref(), Some("Space Needle"));
        assert_eq!(resource.value[1].suggestion_type.as_deref(), Some("Address"));
    }
}
