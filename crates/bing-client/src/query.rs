//! URL builders for the Bing Maps REST API
//!
//! Pure functions: parameters in, URL out. The key is always the last pair.

use geocoding_core::{
    require_range, require_text, BoolStyle, GeocodingError, Provider, QueryWriter, Result,
};
use url::Url;

use crate::config::BingConfig;
use crate::params::{
    AddressParameters, AutosuggestParameters, GeocodingParameters, ReverseGeocodingParameters,
};

const PROVIDER: Provider = Provider::Bing;

pub fn geocode_url(base_url: &str, params: &GeocodingParameters, config: &BingConfig) -> Result<Url> {
    let query = require_text(PROVIDER, "Query", Some(params.query.as_str()))?;

    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, ["Locations"])?;
    q.pair("query", query);
    if let Some(max) = params.max_results {
        q.pair("maxResults", require_range(PROVIDER, "MaxResults", max, 1, 20)?);
    }
    q.flag(
        "includeNeighborhood",
        params.include_neighborhood,
        BoolStyle::Digit,
    );
    if params.include_country_iso2 {
        q.pair("include", "ciso2");
    }
    q.opt("userLocation", params.user_location.map(|c| c.to_wire()))
        .opt("userMapView", params.user_map_view.map(|b| b.to_wire()))
        .text("userIp", params.user_ip.as_deref())
        .text("c", params.culture.as_deref())
        .pair("key", config.api_key());
    Ok(q.finish())
}

pub fn address_url(base_url: &str, params: &AddressParameters, config: &BingConfig) -> Result<Url> {
    let components = [
        ("addressLine", &params.address_line),
        ("locality", &params.locality),
        ("adminDistrict", &params.admin_district),
        ("postalCode", &params.postal_code),
        ("countryRegion", &params.country_region),
    ];
    if components
        .iter()
        .all(|(_, v)| v.as_deref().map_or(true, |s| s.trim().is_empty()))
    {
        return Err(GeocodingError::missing_field(PROVIDER, "Address"));
    }

    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, ["Locations"])?;
    for (name, value) in components {
        q.text(name, value.as_deref());
    }
    if let Some(max) = params.max_results {
        q.pair("maxResults", require_range(PROVIDER, "MaxResults", max, 1, 20)?);
    }
    q.flag(
        "includeNeighborhood",
        params.include_neighborhood,
        BoolStyle::Digit,
    );
    if params.include_country_iso2 {
        q.pair("include", "ciso2");
    }
    q.opt("userLocation", params.user_location.map(|c| c.to_wire()))
        .text("c", params.culture.as_deref())
        .pair("key", config.api_key());
    Ok(q.finish())
}

pub fn reverse_geocode_url(
    base_url: &str,
    params: &ReverseGeocodingParameters,
    config: &BingConfig,
) -> Result<Url> {
    let point = params
        .point
        .ok_or_else(|| GeocodingError::missing_field(PROVIDER, "Point"))?;

    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, ["Locations".to_string(), point.to_wire()])?;
    q.wire_list("includeEntityTypes", &params.include_entity_types, ",")
        .flag(
            "includeNeighborhood",
            params.include_neighborhood,
            BoolStyle::Digit,
        );
    if params.include_country_iso2 {
        q.pair("include", "ciso2");
    }
    q.flag("verboseplacenames", params.verbose_place_names, BoolStyle::Word)
        .text("c", params.culture.as_deref())
        .pair("key", config.api_key());
    Ok(q.finish())
}

pub fn autosuggest_url(
    base_url: &str,
    params: &AutosuggestParameters,
    config: &BingConfig,
) -> Result<Url> {
    let query = require_text(PROVIDER, "Query", Some(params.query.as_str()))?;

    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, ["Autosuggest"])?;
    q.pair("query", query)
        .opt("userLocation", params.user_location.map(|c| c.to_wire()))
        .opt(
            "userCircularMapView",
            params.user_circular_map_view.map(|c| c.to_wire()),
        )
        .opt("userMapView", params.user_map_view.map(|b| b.to_wire()));
    if let Some(max) = params.max_results {
        q.pair("maxResults", require_range(PROVIDER, "MaxResults", max, 1, 10)?);
    }
    q.wire_list("includeEntityTypes", &params.include_entity_types, ",")
        .text("culture", params.culture.as_deref())
        .text("userRegion", params.user_region.as_deref())
        .text("countryFilter", params.country_filter.as_deref())
        .pair("key", config.api_key());
    Ok(q.finish())
}
