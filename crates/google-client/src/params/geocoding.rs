//! Geocoding API parameters

use geocoding_core::{wire_enum, WireValue};

use crate::geometry::{Bounds, LatLng};

wire_enum! {
    /// Component filter keys for forward geocoding
    pub enum ComponentType {
        Route => "route",
        Locality => "locality",
        AdministrativeArea => "administrative_area",
        PostalCode => "postal_code",
        Country => "country",
    }
}

wire_enum! {
    /// `location_type` filter for reverse geocoding
    pub enum LocationType {
        Rooftop => "ROOFTOP",
        RangeInterpolated => "RANGE_INTERPOLATED",
        GeometricCenter => "GEOMETRIC_CENTER",
        Approximate => "APPROXIMATE",
    }
}

wire_enum! {
    /// `result_type` filter for reverse geocoding
    pub enum AddressType {
        StreetAddress => "street_address",
        Route => "route",
        Intersection => "intersection",
        Political => "political",
        Country => "country",
        AdministrativeAreaLevel1 => "administrative_area_level_1",
        AdministrativeAreaLevel2 => "administrative_area_level_2",
        AdministrativeAreaLevel3 => "administrative_area_level_3",
        ColloquialArea => "colloquial_area",
        Locality => "locality",
        Sublocality => "sublocality",
        Neighborhood => "neighborhood",
        Premise => "premise",
        Subpremise => "subpremise",
        PlusCode => "plus_code",
        PostalCode => "postal_code",
        NaturalFeature => "natural_feature",
        Airport => "airport",
        Park => "park",
        PointOfInterest => "point_of_interest",
    }
}

/// One `components` restriction, `type:value` on the wire
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentFilter {
    pub component: ComponentType,
    pub value: String,
}

impl ComponentFilter {
    pub fn new(component: ComponentType, value: impl Into<String>) -> Self {
        Self {
            component,
            value: value.into(),
        }
    }

    pub fn to_wire(&self) -> String {
        format!("{}:{}", self.component.wire(), self.value)
    }
}

/// `GET /geocode/json?address=`
///
/// Either `address`, `place_id` or at least one component filter is required.
#[derive(Debug, Clone, Default)]
pub struct GeocodeParameters {
    pub address: String,
    pub components: Vec<ComponentFilter>,
    /// Geocode a known place ID instead of an address
    pub place_id: Option<String>,
    /// Viewport bias
    pub bounds: Option<Bounds>,
    pub language: Option<String>,
    /// ccTLD region bias, e.g. `es`
    pub region: Option<String>,
}

impl GeocodeParameters {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }
}

/// `GET /geocode/json?latlng=`
#[derive(Debug, Clone, Default)]
pub struct ReverseGeocodeParameters {
    /// Required
    pub coordinate: Option<LatLng>,
    pub result_types: Vec<AddressType>,
    pub location_types: Vec<LocationType>,
    pub language: Option<String>,
}

impl ReverseGeocodeParameters {
    pub fn new(coordinate: LatLng) -> Self {
        Self {
            coordinate: Some(coordinate),
            ..Default::default()
        }
    }
}
