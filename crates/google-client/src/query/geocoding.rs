use geocoding_core::{GeocodingError, QueryWriter, Result};
use url::Url;

use super::PROVIDER;
use crate::config::GoogleConfig;
use crate::params::{GeocodeParameters, ReverseGeocodeParameters};

pub fn geocode_url(base_url: &str, params: &GeocodeParameters, config: &GoogleConfig) -> Result<Url> {
    let address = params.address.trim();
    let place_id = params.place_id.as_deref().map(str::trim).unwrap_or_default();
    if address.is_empty() && place_id.is_empty() && params.components.is_empty() {
        return Err(GeocodingError::missing_field(PROVIDER, "Address"));
    }

    let components: Vec<String> = params.components.iter().map(|c| c.to_wire()).collect();

    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, ["geocode", "json"])?;
    q.text("address", Some(address))
        .text("place_id", Some(place_id))
        .list("components", &components, "|")
        .opt("bounds", params.bounds.map(|b| b.to_wire()))
        .text("language", params.language.as_deref())
        .text("region", params.region.as_deref())
        .pair("key", config.api_key());
    Ok(q.finish())
}

pub fn reverse_geocode_url(
    base_url: &str,
    params: &ReverseGeocodeParameters,
    config: &GoogleConfig,
) -> Result<Url> {
    let coordinate = params
        .coordinate
        .ok_or_else(|| GeocodingError::missing_field(PROVIDER, "Coordinate"))?;

    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, ["geocode", "json"])?;
    q.pair("latlng", coordinate.to_wire())
        .wire_list("result_type", &params.result_types, "|")
        .wire_list("location_type", &params.location_types, "|")
        .text("language", params.language.as_deref())
        .pair("key", config.api_key());
    Ok(q.finish())
}
