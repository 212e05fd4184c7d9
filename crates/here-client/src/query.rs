//! URL builders for the HERE Geocoding & Search endpoints
//!
//! Each endpoint lives on its own host (`https://geocode.search.hereapi.com`,
//! `https://revgeocode.search.hereapi.com`, ...); the builders take that
//! host root and append `/v1/{endpoint}`. `apiKey` is always the last pair.

use geocoding_core::{
    require_range, require_text, GeocodingError, Provider, QueryWriter, Result,
};
use url::Url;

use crate::config::HereConfig;
use crate::geometry::AreaFilter;
use crate::params::{
    AutocompleteParameters, AutosuggestParameters, BrowseParameters, DiscoverParameters,
    GeocodeParameters, LookupParameters, ReverseGeocodeParameters,
};

const PROVIDER: Provider = Provider::Here;

fn endpoint_writer(base_url: &str, endpoint: &str) -> Result<QueryWriter> {
    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, ["v1", endpoint])?;
    Ok(q)
}

fn check_limit(limit: Option<u32>, max: u32) -> Result<Option<u32>> {
    limit
        .map(|l| require_range(PROVIDER, "Limit", l, 1, max))
        .transpose()
}

pub fn geocode_url(base_url: &str, params: &GeocodeParameters, config: &HereConfig) -> Result<Url> {
    let query = params.query.trim();
    let qualified = params.qualified_query.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() && qualified.is_empty() {
        return Err(GeocodingError::missing_field(PROVIDER, "Query"));
    }
    let limit = check_limit(params.limit, 100)?;
    let area = (!params.country_codes.is_empty())
        .then(|| AreaFilter::CountryCode(params.country_codes.clone()).to_wire());

    let mut q = endpoint_writer(base_url, "geocode")?;
    q.text("q", Some(query))
        .text("qq", Some(qualified))
        .opt("at", params.at.map(|c| c.to_wire()))
        .opt("in", area)
        .wire_list("types", &params.types, ",")
        .opt("limit", limit)
        .text("lang", params.lang.as_deref())
        .text("politicalView", params.political_view.as_deref())
        .wire_list("show", &params.show, ",")
        .pair("apiKey", config.api_key());
    Ok(q.finish())
}

pub fn reverse_geocode_url(
    base_url: &str,
    params: &ReverseGeocodeParameters,
    config: &HereConfig,
) -> Result<Url> {
    let at = params
        .at
        .ok_or_else(|| GeocodingError::missing_field(PROVIDER, "At"))?;
    let limit = check_limit(params.limit, 100)?;

    let mut q = endpoint_writer(base_url, "revgeocode")?;
    q.pair("at", at.to_wire())
        .wire_list("types", &params.types, ",")
        .opt("limit", limit)
        .text("lang", params.lang.as_deref())
        .text("politicalView", params.political_view.as_deref())
        .wire_list("show", &params.show, ",")
        .pair("apiKey", config.api_key());
    Ok(q.finish())
}

pub fn discover_url(base_url: &str, params: &DiscoverParameters, config: &HereConfig) -> Result<Url> {
    let query = require_text(PROVIDER, "Query", Some(params.query.as_str()))?;
    if params.at.is_none() && params.area.is_none() {
        return Err(GeocodingError::missing_field(PROVIDER, "At"));
    }
    let limit = check_limit(params.limit, 100)?;

    let mut q = endpoint_writer(base_url, "discover")?;
    q.pair("q", query)
        .opt("at", params.at.map(|c| c.to_wire()))
        .opt("in", params.area.as_ref().map(AreaFilter::to_wire))
        .opt("limit", limit)
        .text("lang", params.lang.as_deref())
        .text("politicalView", params.political_view.as_deref())
        .wire_list("show", &params.show, ",")
        .pair("apiKey", config.api_key());
    Ok(q.finish())
}

pub fn autosuggest_url(
    base_url: &str,
    params: &AutosuggestParameters,
    config: &HereConfig,
) -> Result<Url> {
    let query = require_text(PROVIDER, "Query", Some(params.query.as_str()))?;
    let limit = check_limit(params.limit, 100)?;
    let terms_limit = params
        .terms_limit
        .map(|l| require_range(PROVIDER, "TermsLimit", l, 0, 10))
        .transpose()?;

    let mut q = endpoint_writer(base_url, "autosuggest")?;
    q.pair("q", query)
        .opt("at", params.at.map(|c| c.to_wire()))
        .opt("in", params.area.as_ref().map(AreaFilter::to_wire))
        .opt("limit", limit)
        .opt("termsLimit", terms_limit)
        .text("lang", params.lang.as_deref())
        .text("politicalView", params.political_view.as_deref())
        .wire_list("show", &params.show, ",")
        .pair("apiKey", config.api_key());
    Ok(q.finish())
}

pub fn autocomplete_url(
    base_url: &str,
    params: &AutocompleteParameters,
    config: &HereConfig,
) -> Result<Url> {
    let query = require_text(PROVIDER, "Query", Some(params.query.as_str()))?;
    let limit = check_limit(params.limit, 20)?;

    let mut q = endpoint_writer(base_url, "autocomplete")?;
    q.pair("q", query)
        .opt("at", params.at.map(|c| c.to_wire()))
        .opt("in", params.area.as_ref().map(AreaFilter::to_wire))
        .wire_list("types", &params.types, ",")
        .opt("limit", limit)
        .text("lang", params.lang.as_deref())
        .wire("postalCodeMode", params.postal_code_mode.as_ref())
        .text("politicalView", params.political_view.as_deref())
        .pair("apiKey", config.api_key());
    Ok(q.finish())
}

pub fn browse_url(base_url: &str, params: &BrowseParameters, config: &HereConfig) -> Result<Url> {
    let at = params
        .at
        .ok_or_else(|| GeocodingError::missing_field(PROVIDER, "At"))?;
    let limit = check_limit(params.limit, 100)?;

    let mut q = endpoint_writer(base_url, "browse")?;
    q.pair("at", at.to_wire())
        .opt("in", params.area.as_ref().map(AreaFilter::to_wire))
        .list("categories", &params.categories, ",")
        .list("foodTypes", &params.food_types, ",")
        .list("chains", &params.chains, ",")
        .text("name", params.name.as_deref())
        .opt("limit", limit)
        .text("lang", params.lang.as_deref())
        .text("politicalView", params.political_view.as_deref())
        .wire_list("show", &params.show, ",")
        .pair("apiKey", config.api_key());
    Ok(q.finish())
}

pub fn lookup_url(base_url: &str, params: &LookupParameters, config: &HereConfig) -> Result<Url> {
    let id = require_text(PROVIDER, "Id", Some(params.id.as_str()))?;

    let mut q = endpoint_writer(base_url, "lookup")?;
    q.pair("id", id)
        .text("lang", params.lang.as_deref())
        .text("politicalView", params.political_view.as_deref())
        .wire_list("show", &params.show, ",")
        .pair("apiKey", config.api_key());
    Ok(q.finish())
}
