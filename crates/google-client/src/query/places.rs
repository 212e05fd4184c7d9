use geocoding_core::{require_range, require_text, GeocodingError, QueryWriter, Result};
use url::Url;

use super::PROVIDER;
use crate::config::GoogleConfig;
use crate::params::{
    AutocompleteParameters, FindPlaceParameters, NearbySearchParameters, PlaceDetailsParameters,
    RankBy, TextSearchParameters,
};

const MAX_RADIUS_METERS: u32 = 50_000;
const MAX_AUTOCOMPLETE_COUNTRIES: usize = 5;

fn places_writer(base_url: &str, endpoint: &str) -> Result<QueryWriter> {
    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, ["place", endpoint, "json"])?;
    Ok(q)
}

/// Validate and append `minprice` / `maxprice`
fn push_price_range(q: &mut QueryWriter, min: Option<u8>, max: Option<u8>) -> Result<()> {
    let min = min
        .map(|p| require_range(PROVIDER, "MinPrice", p, 0, 4))
        .transpose()?;
    let max = max
        .map(|p| require_range(PROVIDER, "MaxPrice", p, 0, 4))
        .transpose()?;
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(GeocodingError::invalid_field(
                PROVIDER,
                "MinPrice",
                format_args!("({min}) must not exceed MaxPrice ({max})"),
            ));
        }
    }
    q.opt("minprice", min).opt("maxprice", max);
    Ok(())
}

fn check_radius(radius: Option<u32>) -> Result<Option<u32>> {
    radius
        .map(|r| require_range(PROVIDER, "Radius", r, 1, MAX_RADIUS_METERS))
        .transpose()
}

pub fn find_place_url(
    base_url: &str,
    params: &FindPlaceParameters,
    config: &GoogleConfig,
) -> Result<Url> {
    let input = require_text(PROVIDER, "Input", Some(params.input.as_str()))?;

    let mut q = places_writer(base_url, "findplacefromtext")?;
    q.pair("input", input)
        .wire("inputtype", Some(&params.input_type))
        .wire_list("fields", &params.fields, ",")
        .opt("locationbias", params.location_bias.map(|b| b.to_wire()))
        .text("language", params.language.as_deref())
        .pair("key", config.api_key());
    Ok(q.finish())
}

pub fn nearby_search_url(
    base_url: &str,
    params: &NearbySearchParameters,
    config: &GoogleConfig,
) -> Result<Url> {
    let location = params
        .location
        .ok_or_else(|| GeocodingError::missing_field(PROVIDER, "Location"))?;
    let radius = check_radius(params.radius)?;

    if params.rank_by == Some(RankBy::Distance) {
        if radius.is_some() {
            return Err(GeocodingError::invalid_field(
                PROVIDER,
                "Radius",
                "must not be set when ranking by distance",
            ));
        }
        let has_keyword = params
            .keyword
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty());
        if !has_keyword && params.place_type.is_none() {
            return Err(GeocodingError::missing_field(PROVIDER, "Keyword"));
        }
    } else if radius.is_none() {
        return Err(GeocodingError::missing_field(PROVIDER, "Radius"));
    }

    let mut q = places_writer(base_url, "nearbysearch")?;
    q.pair("location", location.to_wire())
        .opt("radius", radius)
        .text("keyword", params.keyword.as_deref())
        .wire("type", params.place_type.as_ref());
    push_price_range(&mut q, params.min_price, params.max_price)?;
    // Google treats the mere presence of `opennow` as true
    if params.open_now {
        q.pair("opennow", "true");
    }
    q.wire("rankby", params.rank_by.as_ref())
        .text("pagetoken", params.page_token.as_deref())
        .text("language", params.language.as_deref())
        .pair("key", config.api_key());
    Ok(q.finish())
}

pub fn text_search_url(
    base_url: &str,
    params: &TextSearchParameters,
    config: &GoogleConfig,
) -> Result<Url> {
    let query = require_text(PROVIDER, "Query", Some(params.query.as_str()))?;
    let radius = check_radius(params.radius)?;

    let mut q = places_writer(base_url, "textsearch")?;
    q.pair("query", query)
        .opt("location", params.location.map(|l| l.to_wire()))
        .opt("radius", radius);
    push_price_range(&mut q, params.min_price, params.max_price)?;
    if params.open_now {
        q.pair("opennow", "true");
    }
    q.wire("type", params.place_type.as_ref())
        .text("region", params.region.as_deref())
        .text("pagetoken", params.page_token.as_deref())
        .text("language", params.language.as_deref())
        .pair("key", config.api_key());
    Ok(q.finish())
}

pub fn place_details_url(
    base_url: &str,
    params: &PlaceDetailsParameters,
    config: &GoogleConfig,
) -> Result<Url> {
    let place_id = require_text(PROVIDER, "PlaceId", Some(params.place_id.as_str()))?;

    let mut q = places_writer(base_url, "details")?;
    q.pair("place_id", place_id)
        .wire_list("fields", &params.fields, ",")
        .text("language", params.language.as_deref())
        .text("region", params.region.as_deref())
        .text("sessiontoken", params.session_token.as_deref())
        .wire("reviews_sort", params.reviews_sort.as_ref())
        .flag(
            "reviews_no_translations",
            params.reviews_no_translations,
            geocoding_core::BoolStyle::Word,
        )
        .pair("key", config.api_key());
    Ok(q.finish())
}

pub fn autocomplete_url(
    base_url: &str,
    params: &AutocompleteParameters,
    config: &GoogleConfig,
) -> Result<Url> {
    let input = require_text(PROVIDER, "Input", Some(params.input.as_str()))?;
    if params.countries.len() > MAX_AUTOCOMPLETE_COUNTRIES {
        return Err(GeocodingError::invalid_field(
            PROVIDER,
            "Countries",
            format_args!("accepts at most {MAX_AUTOCOMPLETE_COUNTRIES} entries"),
        ));
    }
    if params.strict_bounds && (params.location.is_none() || params.radius.is_none()) {
        return Err(GeocodingError::invalid_field(
            PROVIDER,
            "StrictBounds",
            "requires Location and Radius",
        ));
    }
    let radius = check_radius(params.radius)?;

    let countries: Vec<String> = params
        .countries
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(|c| format!("country:{}", c.to_ascii_lowercase()))
        .collect();

    let mut q = places_writer(base_url, "autocomplete")?;
    q.pair("input", input)
        .opt("offset", params.offset)
        .opt("location", params.location.map(|l| l.to_wire()))
        .opt("radius", radius);
    if params.strict_bounds {
        q.pair("strictbounds", "true");
    }
    q.wire_list("types", &params.types, "|")
        .list("components", &countries, "|")
        .text("language", params.language.as_deref())
        .text("sessiontoken", params.session_token.as_deref())
        .pair("key", config.api_key());
    Ok(q.finish())
}
