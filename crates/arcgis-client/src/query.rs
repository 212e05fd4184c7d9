//! URL builders for the GeocodeServer operations and the OAuth token exchange
//!
//! Every operation asks for `f=json`; `token` (an API key or an OAuth access
//! token) is always the last pair.

use geocoding_core::{
    require_range, require_text, BoolStyle, GeocodingError, Provider, QueryWriter, Result,
};
use url::Url;

use crate::params::{FindAddressCandidatesParameters, ReverseGeocodeParameters, SuggestParameters};

const PROVIDER: Provider = Provider::ArcGis;

fn operation_writer(base_url: &str, operation: &str) -> Result<QueryWriter> {
    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, [operation])?;
    Ok(q)
}

pub fn find_address_candidates_url(
    base_url: &str,
    params: &FindAddressCandidatesParameters,
    token: &str,
) -> Result<Url> {
    let has_text = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    if !has_text(&params.single_line) && !has_text(&params.address) {
        return Err(GeocodingError::missing_field(PROVIDER, "Address"));
    }
    let max_locations = params
        .max_locations
        .map(|m| require_range(PROVIDER, "MaxLocations", m, 1, 50))
        .transpose()?;

    let mut q = operation_writer(base_url, "findAddressCandidates")?;
    q.text("SingleLine", params.single_line.as_deref())
        .text("Address", params.address.as_deref())
        .text("Address2", params.address2.as_deref())
        .text("Address3", params.address3.as_deref())
        .text("Neighborhood", params.neighborhood.as_deref())
        .text("City", params.city.as_deref())
        .text("Subregion", params.subregion.as_deref())
        .text("Region", params.region.as_deref())
        .text("Postal", params.postal.as_deref())
        .text("PostalExt", params.postal_ext.as_deref())
        .text("CountryCode", params.country_code.as_deref())
        .list("category", &params.category, ",")
        .list("outFields", &params.out_fields, ",")
        .opt("maxLocations", max_locations)
        .opt("location", params.location.map(|p| p.to_wire()))
        .opt("searchExtent", params.search_extent.map(|e| e.to_wire()))
        .flag("forStorage", params.for_storage, BoolStyle::Word)
        .text("langCode", params.lang_code.as_deref())
        .text("sourceCountry", params.source_country.as_deref())
        .wire("locationType", params.location_type.as_ref())
        .text("magicKey", params.magic_key.as_deref())
        .opt("outSR", params.out_sr)
        .pair("f", "json")
        .pair("token", token);
    Ok(q.finish())
}

pub fn reverse_geocode_url(
    base_url: &str,
    params: &ReverseGeocodeParameters,
    token: &str,
) -> Result<Url> {
    let location = params
        .location
        .ok_or_else(|| GeocodingError::missing_field(PROVIDER, "Location"))?;

    let mut q = operation_writer(base_url, "reverseGeocode")?;
    q.pair("location", location.to_wire())
        .wire_list("featureTypes", &params.feature_types, ",")
        .wire("locationType", params.location_type.as_ref())
        .text("langCode", params.lang_code.as_deref())
        .opt("outSR", params.out_sr)
        .flag("forStorage", params.for_storage, BoolStyle::Word)
        .pair("f", "json")
        .pair("token", token);
    Ok(q.finish())
}

pub fn suggest_url(base_url: &str, params: &SuggestParameters, token: &str) -> Result<Url> {
    let text = require_text(PROVIDER, "Text", Some(params.text.as_str()))?;
    let max_suggestions = params
        .max_suggestions
        .map(|m| require_range(PROVIDER, "MaxSuggestions", m, 1, 15))
        .transpose()?;

    let mut q = operation_writer(base_url, "suggest")?;
    q.pair("text", text)
        .opt("location", params.location.map(|p| p.to_wire()))
        .list("category", &params.category, ",")
        .opt("searchExtent", params.search_extent.map(|e| e.to_wire()))
        .opt("maxSuggestions", max_suggestions)
        .text("countryCode", params.country_code.as_deref())
        .text("preferredLabelValues", params.preferred_label_values.as_deref())
        .pair("f", "json")
        .pair("token", token);
    Ok(q.finish())
}

/// Client-credentials exchange against `{token_url}`
pub fn token_url(token_url: &str, client_id: &str, client_secret: &str) -> Result<Url> {
    let client_id = require_text(PROVIDER, "ClientId", Some(client_id))?;
    let client_secret = require_text(PROVIDER, "ClientSecret", Some(client_secret))?;

    let mut q = QueryWriter::parse(PROVIDER, token_url)?;
    q.pair("client_id", client_id)
        .pair("client_secret", client_secret)
        .pair("grant_type", "client_credentials")
        .pair("f", "json");
    Ok(q.finish())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::geometry::{Extent, Point};
    use crate::params::{FeatureType, LocationType};

    const BASE: &str =
        "https://geocode-api.arcgis.com/arcgis/rest/services/World/GeocodeServer";

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_find_requires_address() {
        let err = find_address_candidates_url(
            BASE,
            &FindAddressCandidatesParameters::default(),
            "tok",
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message().contains("Address"));

        let params = FindAddressCandidatesParameters {
            single_line: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(find_address_candidates_url(BASE, &params, "tok").is_err());
    }

    #[test]
    fn test_find_structured_address_is_enough() {
        let params = FindAddressCandidatesParameters {
            address: Some("380 New York St".to_string()),
            city: Some("Redlands".to_string()),
            region: Some("CA".to_string()),
            postal: Some("92373".to_string()),
            ..Default::default()
        };
        let url = find_address_candidates_url(BASE, &params, "tok").unwrap();
        let q = query_map(&url);
        assert_eq!(q["Address"], "380 New York St");
        assert_eq!(q["City"], "Redlands");
        assert!(!q.contains_key("SingleLine"));
    }

    #[test]
    fn test_find_all_fields() {
        let params = FindAddressCandidatesParameters {
            category: vec!["Address".to_string(), "Postal".to_string()],
            out_fields: vec!["Match_addr".to_string(), "Addr_type".to_string()],
            max_locations: Some(10),
            location: Some(Point::new(-117.196, 34.056)),
            search_extent: Some(Extent::new(-117.3, 34.0, -117.1, 34.1)),
            for_storage: Some(false),
            lang_code: Some("en".to_string()),
            source_country: Some("USA".to_string()),
            location_type: Some(LocationType::Rooftop),
            magic_key: Some("dHA9MCNsb2M9".to_string()),
            out_sr: Some(4326),
            ..FindAddressCandidatesParameters::single_line("380 New York St, Redlands, CA")
        };
        let url = find_address_candidates_url(BASE, &params, "tok").unwrap();
        assert!(url.path().ends_with("/World/GeocodeServer/findAddressCandidates"));

        let q = query_map(&url);
        assert_eq!(q["SingleLine"], "380 New York St, Redlands, CA");
        assert_eq!(q["category"], "Address,Postal");
        assert_eq!(q["outFields"], "Match_addr,Addr_type");
        assert_eq!(q["maxLocations"], "10");
        assert_eq!(q["location"], "-117.196,34.056");
        assert_eq!(q["searchExtent"], "-117.3,34,-117.1,34.1");
        assert_eq!(q["forStorage"], "false");
        assert_eq!(q["langCode"], "en");
        assert_eq!(q["sourceCountry"], "USA");
        assert_eq!(q["locationType"], "rooftop");
        assert_eq!(q["magicKey"], "dHA9MCNsb2M9");
        assert_eq!(q["outSR"], "4326");
        assert!(url.query().unwrap().ends_with("&f=json&token=tok"));
    }

    #[test]
    fn test_find_max_locations_range() {
        let params = FindAddressCandidatesParameters {
            max_locations: Some(51),
            ..FindAddressCandidatesParameters::single_line("Redlands")
        };
        let err = find_address_candidates_url(BASE, &params, "tok").unwrap_err();
        assert!(err.message().contains("MaxLocations"));
    }

    #[test]
    fn test_reverse() {
        let err =
            reverse_geocode_url(BASE, &ReverseGeocodeParameters::default(), "tok").unwrap_err();
        assert!(err.message().contains("Location"));

        let params = ReverseGeocodeParameters {
            feature_types: vec![FeatureType::Poi, FeatureType::PointAddress],
            ..ReverseGeocodeParameters::new(Point::from_lat_lng(56.78, 78.91))
        };
        let url = reverse_geocode_url(BASE, &params, "tok").unwrap();
        assert!(url.path().ends_with("/reverseGeocode"));
        let q = query_map(&url);
        assert_eq!(q["location"], "78.91,56.78");
        assert_eq!(q["featureTypes"], "POI,PointAddress");
        assert_eq!(q["f"], "json");
    }

    #[test]
    fn test_suggest() {
        let err = suggest_url(BASE, &SuggestParameters::default(), "tok").unwrap_err();
        assert!(err.message().contains("Text"));

        let params = SuggestParameters {
            max_suggestions: Some(16),
            ..SuggestParameters::new("380 New Y")
        };
        let err = suggest_url(BASE, &params, "tok").unwrap_err();
        assert!(err.message().contains("MaxSuggestions"));

        let params = SuggestParameters {
            max_suggestions: Some(5),
            country_code: Some("USA".to_string()),
            ..params
        };
        let url = suggest_url(BASE, &params, "tok").unwrap();
        let q = query_map(&url);
        assert_eq!(q["text"], "380 New Y");
        assert_eq!(q["maxSuggestions"], "5");
        assert_eq!(q["countryCode"], "USA");
    }

    #[test]
    fn test_token_url() {
        let url = token_url("https://www.arcgis.com/sharing/rest/oauth2/token", "id", "secret")
            .unwrap();
        assert_eq!(
            url.query(),
            Some("client_id=id&client_secret=secret&grant_type=client_credentials&f=json")
        );
        assert!(token_url("https://www.arcgis.com/sharing/rest/oauth2/token", "", "s").is_err());
    }
}
