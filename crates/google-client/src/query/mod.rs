//! URL builders for the Google Maps APIs
//!
//! Pure functions: parameters in, URL out. Google joins filter lists with
//! `|` and field lists with `,`; the key is always the last pair.

mod geocoding;
mod places;

pub use geocoding::{geocode_url, reverse_geocode_url};
pub use places::{
    autocomplete_url, find_place_url, nearby_search_url, place_details_url, text_search_url,
};

use geocoding_core::Provider;

pub(crate) const PROVIDER: Provider = Provider::Google;

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    use url::Url;

    use crate::config::GoogleConfig;

    pub const BASE: &str = "https://maps.googleapis.com/maps/api";

    pub fn config() -> GoogleConfig {
        GoogleConfig::new("test-key")
    }

    pub fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}
