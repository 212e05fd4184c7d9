//! Request parameters for the Geocoding & Search endpoints

use geocoding_core::wire_enum;

use crate::geometry::{AreaFilter, Coordinate};

wire_enum! {
    /// Result types accepted by the `types` filter on geocode and revgeocode
    pub enum ResultTypeFilter {
        Address => "address",
        Area => "area",
        City => "city",
        HouseNumber => "houseNumber",
        PostalCode => "postalCode",
        Street => "street",
        Place => "place",
    }
}

wire_enum! {
    /// Optional response sections requested through `show`
    pub enum ShowField {
        CountryInfo => "countryInfo",
        Parsing => "parsing",
        StreetInfo => "streetInfo",
        Tz => "tz",
        Phonemes => "phonemes",
    }
}

wire_enum! {
    pub enum PostalCodeMode {
        CityLookup => "cityLookup",
        DistrictLookup => "districtLookup",
    }
}

/// `GET /v1/geocode`
///
/// Either `query` or `qualified_query` (`qq=city=Berlin;street=...`) is required.
#[derive(Debug, Clone, Default)]
pub struct GeocodeParameters {
    pub query: String,
    pub qualified_query: Option<String>,
    pub at: Option<Coordinate>,
    /// Only `countryCode:` filters are accepted here
    pub country_codes: Vec<String>,
    pub types: Vec<ResultTypeFilter>,
    /// 1 to 100
    pub limit: Option<u32>,
    pub lang: Option<String>,
    pub political_view: Option<String>,
    pub show: Vec<ShowField>,
}

impl GeocodeParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// `GET /v1/revgeocode`
#[derive(Debug, Clone, Default)]
pub struct ReverseGeocodeParameters {
    /// Required
    pub at: Option<Coordinate>,
    pub types: Vec<ResultTypeFilter>,
    pub limit: Option<u32>,
    pub lang: Option<String>,
    pub political_view: Option<String>,
    pub show: Vec<ShowField>,
}

impl ReverseGeocodeParameters {
    pub fn new(at: Coordinate) -> Self {
        Self {
            at: Some(at),
            ..Default::default()
        }
    }
}

/// `GET /v1/discover`: free-text place search around a position
///
/// Needs `query` and a position, either `at` or `area`.
#[derive(Debug, Clone, Default)]
pub struct DiscoverParameters {
    pub query: String,
    pub at: Option<Coordinate>,
    pub area: Option<AreaFilter>,
    pub limit: Option<u32>,
    pub lang: Option<String>,
    pub political_view: Option<String>,
    pub show: Vec<ShowField>,
}

impl DiscoverParameters {
    pub fn new(query: impl Into<String>, at: Coordinate) -> Self {
        Self {
            query: query.into(),
            at: Some(at),
            ..Default::default()
        }
    }
}

/// `GET /v1/autosuggest`
#[derive(Debug, Clone, Default)]
pub struct AutosuggestParameters {
    pub query: String,
    pub at: Option<Coordinate>,
    pub area: Option<AreaFilter>,
    pub limit: Option<u32>,
    /// Maximum number of query term suggestions, 0 to 10
    pub terms_limit: Option<u32>,
    pub lang: Option<String>,
    pub political_view: Option<String>,
    pub show: Vec<ShowField>,
}

impl AutosuggestParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// `GET /v1/autocomplete`: address completion only, no places
#[derive(Debug, Clone, Default)]
pub struct AutocompleteParameters {
    pub query: String,
    pub at: Option<Coordinate>,
    pub area: Option<AreaFilter>,
    pub types: Vec<ResultTypeFilter>,
    /// 1 to 20
    pub limit: Option<u32>,
    pub lang: Option<String>,
    pub postal_code_mode: Option<PostalCodeMode>,
    pub political_view: Option<String>,
}

impl AutocompleteParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// `GET /v1/browse`: places around a position, filtered by category
#[derive(Debug, Clone, Default)]
pub struct BrowseParameters {
    /// Required
    pub at: Option<Coordinate>,
    pub area: Option<AreaFilter>,
    /// HERE category IDs such as `100-1000-0000`
    pub categories: Vec<String>,
    pub food_types: Vec<String>,
    pub chains: Vec<String>,
    pub name: Option<String>,
    pub limit: Option<u32>,
    pub lang: Option<String>,
    pub political_view: Option<String>,
    pub show: Vec<ShowField>,
}

impl BrowseParameters {
    pub fn new(at: Coordinate) -> Self {
        Self {
            at: Some(at),
            ..Default::default()
        }
    }
}

/// `GET /v1/lookup`
#[derive(Debug, Clone, Default)]
pub struct LookupParameters {
    /// Required, e.g. `here:pds:place:276u33db-8097f3194e4b411081b761ea9a366776`
    pub id: String,
    pub lang: Option<String>,
    pub political_view: Option<String>,
    pub show: Vec<ShowField>,
}

impl LookupParameters {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}
