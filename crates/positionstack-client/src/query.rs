//! URL builders for `/forward` and `/reverse`
//!
//! Module flags are written as `1`/`0`; `access_key` is always the last pair.

use geocoding_core::{
    require_range, require_text, BoolStyle, GeocodingError, Provider, QueryWriter, Result,
};
use url::Url;

use crate::config::PositionstackConfig;
use crate::params::{ForwardParameters, RequestOptions, ReverseParameters};

const PROVIDER: Provider = Provider::Positionstack;

fn push_options(q: &mut QueryWriter, options: &RequestOptions) -> Result<()> {
    let limit = options
        .limit
        .map(|l| require_range(PROVIDER, "Limit", l, 1, 80))
        .transpose()?;

    q.list("country", &options.countries, ",")
        .text("language", options.language.as_deref())
        .flag("country_module", options.country_module, BoolStyle::Digit)
        .flag("sun_module", options.sun_module, BoolStyle::Digit)
        .flag("timezone_module", options.timezone_module, BoolStyle::Digit)
        .flag("bbox_module", options.bbox_module, BoolStyle::Digit)
        .opt("limit", limit)
        .list("fields", &options.fields, ",")
        .pair("output", "json");
    Ok(())
}

pub fn forward_url(
    base_url: &str,
    params: &ForwardParameters,
    config: &PositionstackConfig,
) -> Result<Url> {
    let query = require_text(PROVIDER, "Query", Some(params.query.as_str()))?;

    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, ["forward"])?;
    q.pair("query", query)
        .text("region", params.region.as_deref());
    push_options(&mut q, &params.options)?;
    q.pair("access_key", config.access_key());
    Ok(q.finish())
}

pub fn reverse_url(
    base_url: &str,
    params: &ReverseParameters,
    config: &PositionstackConfig,
) -> Result<Url> {
    let query = params
        .query
        .ok_or_else(|| GeocodingError::missing_field(PROVIDER, "Query"))?;

    let mut q = QueryWriter::parse(PROVIDER, base_url)?;
    q.segments(PROVIDER, ["reverse"])?;
    q.pair("query", query.to_wire());
    push_options(&mut q, &params.options)?;
    q.pair("access_key", config.access_key());
    Ok(q.finish())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::params::{Coordinate, ReverseQuery};

    const BASE: &str = "http://api.positionstack.com/v1";

    fn config() -> PositionstackConfig {
        PositionstackConfig::new("test-key")
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_forward_requires_query() {
        let err = forward_url(BASE, &ForwardParameters::default(), &config()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message().contains("Query"));
    }

    #[test]
    fn test_forward_all_fields() {
        let params = ForwardParameters {
            region: Some("Berlin".to_string()),
            options: RequestOptions {
                countries: vec!["DE".to_string(), "-AT".to_string()],
                language: Some("de".to_string()),
                country_module: Some(true),
                sun_module: Some(false),
                timezone_module: Some(true),
                bbox_module: Some(false),
                limit: Some(10),
                fields: vec!["results.latitude".to_string(), "results.longitude".to_string()],
            },
            ..ForwardParameters::new("Pariser Platz 1")
        };
        let url = forward_url(BASE, &params, &config()).unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.path(), "/v1/forward");

        let q = query_map(&url);
        assert_eq!(q["query"], "Pariser Platz 1");
        assert_eq!(q["region"], "Berlin");
        assert_eq!(q["country"], "DE,-AT");
        assert_eq!(q["language"], "de");
        assert_eq!(q["country_module"], "1");
        assert_eq!(q["sun_module"], "0");
        assert_eq!(q["timezone_module"], "1");
        assert_eq!(q["bbox_module"], "0");
        assert_eq!(q["limit"], "10");
        assert_eq!(q["fields"], "results.latitude,results.longitude");
        assert_eq!(q["output"], "json");
        assert!(url.query().unwrap().ends_with("&access_key=test-key"));
    }

    #[test]
    fn test_limit_range() {
        let params = ForwardParameters {
            options: RequestOptions {
                limit: Some(81),
                ..Default::default()
            },
            ..ForwardParameters::new("Berlin")
        };
        let err = forward_url(BASE, &params, &config()).unwrap_err();
        assert!(err.message().contains("Limit"));
    }

    #[test]
    fn test_reverse() {
        let err = reverse_url(BASE, &ReverseParameters::default(), &config()).unwrap_err();
        assert!(err.message().contains("Query"));

        let params = ReverseParameters::new(ReverseQuery::Coordinate(Coordinate::new(56.78, 78.91)));
        let url = reverse_url(BASE, &params, &config()).unwrap();
        assert_eq!(url.path(), "/v1/reverse");
        assert_eq!(
            url.query(),
            Some("query=56.78%2C78.91&output=json&access_key=test-key")
        );
    }
}
