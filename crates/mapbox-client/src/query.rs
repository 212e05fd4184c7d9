//! URL builders for the Geocoding v5 endpoints
//!
//! The search text or the `lng,lat` pair is the last path segment, suffixed
//! with `.json`; `access_token` is always the last query pair.

use geocoding_core::{
    require_range, require_text, BoolStyle, GeocodingError, Provider, QueryWriter, Result,
    WireValue,
};
use url::Url;

use crate::config::MapBoxConfig;
use crate::params::{Endpoint, ForwardGeocodingParameters, ReverseGeocodingParameters};

const PROVIDER: Provider = Provider::MapBox;

fn geocoding_writer(base_url: &str, endpoint: Endpoint, search: &str) -> Result<QueryWriter> {
    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    // `;` would turn the search text into a batch request
    q.segments(
        PROVIDER,
        [
            "geocoding",
            "v5",
            endpoint.wire(),
            format!("{search}.json").as_str(),
        ],
    )?
    .escape_path(&[';']);
    Ok(q)
}

pub fn forward_geocode_url(
    base_url: &str,
    params: &ForwardGeocodingParameters,
    config: &MapBoxConfig,
) -> Result<Url> {
    let query = require_text(PROVIDER, "Query", Some(params.query.as_str()))?;
    let limit = params
        .limit
        .map(|l| require_range(PROVIDER, "Limit", l, 1, 10))
        .transpose()?;

    let mut q = geocoding_writer(base_url, params.endpoint, query)?;
    q.flag("autocomplete", params.autocomplete, BoolStyle::Word)
        .opt("bbox", params.bbox.map(|b| b.to_wire()))
        .list("country", &params.countries, ",")
        .flag("fuzzyMatch", params.fuzzy_match, BoolStyle::Word)
        .list("language", &params.languages, ",")
        .opt("limit", limit)
        .opt("proximity", params.proximity.map(|p| p.to_wire()))
        .flag("routing", params.routing, BoolStyle::Word)
        .wire_list("types", &params.types, ",")
        .text("worldview", params.worldview.as_deref())
        .pair("access_token", config.access_token());
    Ok(q.finish())
}

pub fn reverse_geocode_url(
    base_url: &str,
    params: &ReverseGeocodingParameters,
    config: &MapBoxConfig,
) -> Result<Url> {
    let coordinate = params
        .coordinate
        .ok_or_else(|| GeocodingError::missing_field(PROVIDER, "Coordinate"))?;
    let limit = params
        .limit
        .map(|l| require_range(PROVIDER, "Limit", l, 1, 5))
        .transpose()?;
    if limit.is_some_and(|l| l > 1) && params.types.len() != 1 {
        return Err(GeocodingError::invalid_field(
            PROVIDER,
            "Limit",
            "above 1 requires exactly one Types entry",
        ));
    }

    let mut q = geocoding_writer(base_url, params.endpoint, &coordinate.to_wire())?;
    q.list("country", &params.countries, ",")
        .list("language", &params.languages, ",")
        .opt("limit", limit)
        .wire("reverseMode", params.reverse_mode.as_ref())
        .flag("routing", params.routing, BoolStyle::Word)
        .wire_list("types", &params.types, ",")
        .text("worldview", params.worldview.as_deref())
        .pair("access_token", config.access_token());
    Ok(q.finish())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::geometry::{BoundingBox, Coordinate};
    use crate::params::{FeatureType, Proximity, ReverseMode};

    const BASE: &str = "https://api.mapbox.com";

    fn config() -> MapBoxConfig {
        MapBoxConfig::new("pk.test")
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_forward_requires_query() {
        let err = forward_geocode_url(BASE, &ForwardGeocodingParameters::default(), &config())
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message().contains("Query"));
    }

    #[test]
    fn test_forward_path_encodes_query() {
        let params = ForwardGeocodingParameters::new("2 Lincoln Memorial Circle NW");
        let url = forward_geocode_url(BASE, &params, &config()).unwrap();
        assert_eq!(
            url.path(),
            "/geocoding/v5/mapbox.places/2%20Lincoln%20Memorial%20Circle%20NW.json"
        );
        assert_eq!(url.query(), Some("access_token=pk.test"));
    }

    #[test]
    fn test_forward_semicolon_stays_one_query() {
        let params = ForwardGeocodingParameters::new("Main St; Springfield");
        let url = forward_geocode_url(BASE, &params, &config()).unwrap();
        assert_eq!(
            url.path(),
            "/geocoding/v5/mapbox.places/Main%20St%3B%20Springfield.json"
        );
    }

    #[test]
    fn test_forward_all_fields() {
        let params = ForwardGeocodingParameters {
            endpoint: Endpoint::PlacesPermanent,
            autocomplete: Some(false),
            bbox: Some(BoundingBox::new(-77.08, 38.87, -76.99, 38.93)),
            countries: vec!["us".to_string(), "ca".to_string()],
            fuzzy_match: Some(true),
            languages: vec!["en".to_string(), "fr".to_string()],
            limit: Some(3),
            proximity: Some(Proximity::Coordinate(Coordinate::new(78.91, 56.78))),
            routing: Some(true),
            types: vec![FeatureType::Address, FeatureType::Poi],
            worldview: Some("us".to_string()),
            ..ForwardGeocodingParameters::new("Lincoln Memorial")
        };
        let url = forward_geocode_url(BASE, &params, &config()).unwrap();
        assert!(url.path().starts_with("/geocoding/v5/mapbox.places-permanent/"));

        let q = query_map(&url);
        assert_eq!(q["autocomplete"], "false");
        assert_eq!(q["bbox"], "-77.08,38.87,-76.99,38.93");
        assert_eq!(q["country"], "us,ca");
        assert_eq!(q["fuzzyMatch"], "true");
        assert_eq!(q["language"], "en,fr");
        assert_eq!(q["limit"], "3");
        assert_eq!(q["proximity"], "78.91,56.78");
        assert_eq!(q["routing"], "true");
        assert_eq!(q["types"], "address,poi");
        assert_eq!(q["worldview"], "us");
        assert!(url.query().unwrap().ends_with("&access_token=pk.test"));
    }

    #[test]
    fn test_forward_proximity_ip() {
        let params = ForwardGeocodingParameters {
            proximity: Some(Proximity::Ip),
            ..ForwardGeocodingParameters::new("cafe")
        };
        let url = forward_geocode_url(BASE, &params, &config()).unwrap();
        assert_eq!(query_map(&url)["proximity"], "ip");
    }

    #[test]
    fn test_forward_limit_range() {
        let params = ForwardGeocodingParameters {
            limit: Some(11),
            ..ForwardGeocodingParameters::new("cafe")
        };
        let err = forward_geocode_url(BASE, &params, &config()).unwrap_err();
        assert!(err.message().contains("Limit"));
    }

    #[test]
    fn test_reverse_path_is_lng_lat() {
        let params = ReverseGeocodingParameters::new(Coordinate::new(78.91, 56.78));
        let url = reverse_geocode_url(BASE, &params, &config()).unwrap();
        assert_eq!(url.path(), "/geocoding/v5/mapbox.places/78.91,56.78.json");
    }

    #[test]
    fn test_reverse_requires_coordinate() {
        let err = reverse_geocode_url(BASE, &ReverseGeocodingParameters::default(), &config())
            .unwrap_err();
        assert!(err.message().contains("Coordinate"));
    }

    #[test]
    fn test_reverse_limit_needs_single_type() {
        let mut params = ReverseGeocodingParameters {
            limit: Some(3),
            ..ReverseGeocodingParameters::new(Coordinate::new(-73.989, 40.733))
        };
        assert!(reverse_geocode_url(BASE, &params, &config()).is_err());

        params.types = vec![FeatureType::Address];
        params.reverse_mode = Some(ReverseMode::Score);
        let url = reverse_geocode_url(BASE, &params, &config()).unwrap();
        let q = query_map(&url);
        assert_eq!(q["limit"], "3");
        assert_eq!(q["types"], "address");
        assert_eq!(q["reverseMode"], "score");
    }
}
