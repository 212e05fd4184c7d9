//! URL builders for the geocoding and search endpoints
//!
//! Radar authenticates through the `Authorization` header, so unlike the
//! other providers no credential ever appears in these URLs.

use geocoding_core::{
    require_range, require_text, BoolStyle, GeocodingError, Provider, QueryWriter, Result,
};
use url::Url;

use crate::params::{
    AutocompleteParameters, ForwardGeocodeParameters, IpGeocodeParameters,
    ReverseGeocodeParameters, SearchPlacesParameters,
};

const PROVIDER: Provider = Provider::Radar;

fn writer(base_url: &str, path: [&str; 2]) -> Result<QueryWriter> {
    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, path)?;
    Ok(q)
}

fn check_limit(limit: Option<u32>) -> Result<Option<u32>> {
    limit
        .map(|l| require_range(PROVIDER, "Limit", l, 1, 100))
        .transpose()
}

pub fn forward_geocode_url(base_url: &str, params: &ForwardGeocodeParameters) -> Result<Url> {
    let query = require_text(PROVIDER, "Query", Some(params.query.as_str()))?;

    let mut q = writer(base_url, ["geocode", "forward"])?;
    q.pair("query", query)
        .wire_list("layers", &params.layers, ",")
        .list("country", &params.countries, ",")
        .text("lang", params.lang.as_deref());
    Ok(q.finish())
}

pub fn reverse_geocode_url(base_url: &str, params: &ReverseGeocodeParameters) -> Result<Url> {
    let coordinates = params
        .coordinates
        .ok_or_else(|| GeocodingError::missing_field(PROVIDER, "Coordinates"))?;

    let mut q = writer(base_url, ["geocode", "reverse"])?;
    q.pair("coordinates", coordinates.to_wire())
        .wire_list("layers", &params.layers, ",")
        .text("lang", params.lang.as_deref());
    Ok(q.finish())
}

pub fn ip_geocode_url(base_url: &str, params: &IpGeocodeParameters) -> Result<Url> {
    let mut q = writer(base_url, ["geocode", "ip"])?;
    q.opt("ip", params.ip);
    Ok(q.finish())
}

pub fn autocomplete_url(base_url: &str, params: &AutocompleteParameters) -> Result<Url> {
    let query = require_text(PROVIDER, "Query", Some(params.query.as_str()))?;
    let limit = check_limit(params.limit)?;

    let mut q = writer(base_url, ["search", "autocomplete"])?;
    q.pair("query", query)
        .opt("near", params.near.map(|c| c.to_wire()))
        .wire_list("layers", &params.layers, ",")
        .opt("limit", limit)
        .text("countryCode", params.country_code.as_deref())
        .text("lang", params.lang.as_deref())
        .flag("expandUnits", params.expand_units, BoolStyle::Word);
    Ok(q.finish())
}

pub fn search_places_url(base_url: &str, params: &SearchPlacesParameters) -> Result<Url> {
    let near = params
        .near
        .ok_or_else(|| GeocodingError::missing_field(PROVIDER, "Near"))?;
    let radius = params
        .radius
        .map(|r| require_range(PROVIDER, "Radius", r, 1, 10_000))
        .transpose()?;
    let limit = check_limit(params.limit)?;
    let has_filter = [&params.chains, &params.categories, &params.groups]
        .iter()
        .any(|list| list.iter().any(|v| !v.trim().is_empty()));
    if !has_filter {
        return Err(GeocodingError::invalid_field(
            PROVIDER,
            "Chains",
            "or Categories or Groups is required",
        ));
    }

    let mut q = writer(base_url, ["search", "places"])?;
    q.pair("near", near.to_wire())
        .opt("radius", radius)
        .list("chains", &params.chains, ",")
        .list("categories", &params.categories, ",")
        .list("groups", &params.groups, ",")
        .opt("limit", limit);
    Ok(q.finish())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::geometry::Coordinate;
    use crate::params::Layer;

    const BASE: &str = "https://api.radar.io/v1";

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_forward() {
        let err = forward_geocode_url(BASE, &ForwardGeocodeParameters::default()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message().contains("Query"));

        let params = ForwardGeocodeParameters {
            layers: vec![Layer::Address, Layer::PostalCode],
            countries: vec!["US".to_string(), "CA".to_string()],
            lang: Some("en".to_string()),
            ..ForwardGeocodeParameters::new("20 jay st brooklyn ny")
        };
        let url = forward_geocode_url(BASE, &params).unwrap();
        assert_eq!(url.path(), "/v1/geocode/forward");
        let q = query_map(&url);
        assert_eq!(q["query"], "20 jay st brooklyn ny");
        assert_eq!(q["layers"], "address,postalCode");
        assert_eq!(q["country"], "US,CA");
        assert_eq!(q["lang"], "en");
    }

    #[test]
    fn test_reverse() {
        let err = reverse_geocode_url(BASE, &ReverseGeocodeParameters::default()).unwrap_err();
        assert!(err.message().contains("Coordinates"));

        let url =
            reverse_geocode_url(BASE, &ReverseGeocodeParameters::new(Coordinate::new(56.78, 78.91)))
                .unwrap();
        assert_eq!(url.path(), "/v1/geocode/reverse");
        assert_eq!(url.query(), Some("coordinates=56.78%2C78.91"));
    }

    #[test]
    fn test_ip_is_optional() {
        let url = ip_geocode_url(BASE, &IpGeocodeParameters::default()).unwrap();
        assert_eq!(url.path(), "/v1/geocode/ip");
        assert_eq!(url.query(), None);

        let params = IpGeocodeParameters {
            ip: Some("107.77.199.117".parse().unwrap()),
        };
        let url = ip_geocode_url(BASE, &params).unwrap();
        assert_eq!(url.query(), Some("ip=107.77.199.117"));
    }

    #[test]
    fn test_autocomplete() {
        let params = AutocompleteParameters {
            near: Some(Coordinate::new(40.7, -73.99)),
            limit: Some(10),
            country_code: Some("US".to_string()),
            expand_units: Some(true),
            ..AutocompleteParameters::new("brooklyn roasting")
        };
        let url = autocomplete_url(BASE, &params).unwrap();
        assert_eq!(url.path(), "/v1/search/autocomplete");
        let q = query_map(&url);
        assert_eq!(q["near"], "40.7,-73.99");
        assert_eq!(q["limit"], "10");
        assert_eq!(q["countryCode"], "US");
        assert_eq!(q["expandUnits"], "true");

        let params = AutocompleteParameters {
            limit: Some(101),
            ..params
        };
        assert!(autocomplete_url(BASE, &params).is_err());
    }

    #[test]
    fn test_search_places_rules() {
        let err = search_places_url(BASE, &SearchPlacesParameters::default()).unwrap_err();
        assert!(err.message().contains("Near"));

        let near = Coordinate::new(40.78382, -73.97536);
        let err = search_places_url(BASE, &SearchPlacesParameters::new(near)).unwrap_err();
        assert!(err.message().contains("Chains"));

        let params = SearchPlacesParameters {
            radius: Some(10_001),
            chains: vec!["starbucks".to_string()],
            ..SearchPlacesParameters::new(near)
        };
        let err = search_places_url(BASE, &params).unwrap_err();
        assert!(err.message().contains("Radius"));

        let params = SearchPlacesParameters {
            radius: Some(1000),
            limit: Some(10),
            ..params
        };
        let url = search_places_url(BASE, &params).unwrap();
        let q = query_map(&url);
        assert_eq!(q["near"], "40.78382,-73.97536");
        assert_eq!(q["radius"], "1000");
        assert_eq!(q["chains"], "starbucks");
        assert!(!q.contains_key("categories"));
    }

    #[test]
    fn test_urls_never_carry_a_key() {
        let url = forward_geocode_url(BASE, &ForwardGeocodeParameters::new("x")).unwrap();
        assert!(!url.as_str().contains("key"));
    }
}
