//! URL builders for `/address` and `/reverse`

use geocoding_core::{require_text, BoolStyle, GeocodingError, Provider, QueryWriter, Result};
use url::Url;

use crate::config::MapQuestConfig;
use crate::params::{GeocodeParameters, ReverseGeocodeParameters};

const PROVIDER: Provider = Provider::MapQuest;

pub fn geocode_url(
    base_url: &str,
    params: &GeocodeParameters,
    config: &MapQuestConfig,
) -> Result<Url> {
    let location = require_text(PROVIDER, "Location", Some(params.location.as_str()))?;
    if let Some(max) = params.max_results {
        if max != -1 && max < 1 {
            return Err(GeocodingError::invalid_field(
                PROVIDER,
                "MaxResults",
                format_args!("must be -1 or at least 1, got {max}"),
            ));
        }
    }

    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, ["address"])?;
    q.pair("location", location)
        .opt("boundingBox", params.bounding_box.map(|b| b.to_wire()))
        .flag("ignoreLatLngInput", params.ignore_lat_lng_input, BoolStyle::Word)
        .opt("maxResults", params.max_results)
        .flag("thumbMaps", params.thumb_maps, BoolStyle::Word)
        .wire("intlMode", params.intl_mode.as_ref())
        .pair("outFormat", "json")
        .pair("key", config.api_key());
    Ok(q.finish())
}

pub fn reverse_geocode_url(
    base_url: &str,
    params: &ReverseGeocodeParameters,
    config: &MapQuestConfig,
) -> Result<Url> {
    let coordinate = params
        .coordinate
        .ok_or_else(|| GeocodingError::missing_field(PROVIDER, "Coordinate"))?;

    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, ["reverse"])?;
    q.pair("location", coordinate.to_wire())
        .flag("includeRoadMetadata", params.include_road_metadata, BoolStyle::Word)
        .flag(
            "includeNearestIntersection",
            params.include_nearest_intersection,
            BoolStyle::Word,
        )
        .flag("thumbMaps", params.thumb_maps, BoolStyle::Word)
        .pair("outFormat", "json")
        .pair("key", config.api_key());
    Ok(q.finish())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::geometry::{BoundingBox, Coordinate};
    use crate::params::IntlMode;

    const BASE: &str = "https://www.mapquestapi.com/geocoding/v1";

    fn config() -> MapQuestConfig {
        MapQuestConfig::new("test-key")
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_geocode_requires_location() {
        let err = geocode_url(BASE, &GeocodeParameters::default(), &config()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message().contains("Location"));
    }

    #[test]
    fn test_geocode_all_fields() {
        let params = GeocodeParameters {
            bounding_box: Some(BoundingBox::new(
                Coordinate::new(40.1, -105.3),
                Coordinate::new(39.9, -105.1),
            )),
            ignore_lat_lng_input: Some(true),
            max_results: Some(5),
            thumb_maps: Some(false),
            intl_mode: Some(IntlMode::OneBox),
            ..GeocodeParameters::new("1555 Blake St, Denver, CO 80202")
        };
        let url = geocode_url(BASE, &params, &config()).unwrap();
        assert_eq!(url.path(), "/geocoding/v1/address");

        let q = query_map(&url);
        assert_eq!(q["location"], "1555 Blake St, Denver, CO 80202");
        assert_eq!(q["boundingBox"], "40.1,-105.3,39.9,-105.1");
        assert_eq!(q["ignoreLatLngInput"], "true");
        assert_eq!(q["maxResults"], "5");
        assert_eq!(q["thumbMaps"], "false");
        assert_eq!(q["intlMode"], "1BOX");
        assert_eq!(q["outFormat"], "json");
        assert!(url.query().unwrap().ends_with("&key=test-key"));
    }

    #[test]
    fn test_max_results() {
        for ok in [-1, 1, 100] {
            let params = GeocodeParameters {
                max_results: Some(ok),
                ..GeocodeParameters::new("Denver")
            };
            assert!(geocode_url(BASE, &params, &config()).is_ok());
        }
        for bad in [0, -2] {
            let params = GeocodeParameters {
                max_results: Some(bad),
                ..GeocodeParameters::new("Denver")
            };
            let err = geocode_url(BASE, &params, &config()).unwrap_err();
            assert!(err.message().contains("MaxResults"));
        }
    }

    #[test]
    fn test_reverse() {
        let err =
            reverse_geocode_url(BASE, &ReverseGeocodeParameters::default(), &config()).unwrap_err();
        assert!(err.message().contains("Coordinate"));

        let params = ReverseGeocodeParameters {
            include_road_metadata: Some(true),
            include_nearest_intersection: Some(true),
            ..ReverseGeocodeParameters::new(Coordinate::new(56.78, 78.91))
        };
        let url = reverse_geocode_url(BASE, &params, &config()).unwrap();
        assert_eq!(url.path(), "/geocoding/v1/reverse");
        let q = query_map(&url);
        assert_eq!(q["location"], "56.78,78.91");
        assert_eq!(q["includeRoadMetadata"], "true");
        assert_eq!(q["includeNearestIntersection"], "true");
    }
}
