//! Places API parameters

use geocoding_core::wire_enum;

use crate::geometry::{Bounds, LatLng};

wire_enum! {
    pub enum InputType {
        TextQuery => "textquery",
        PhoneNumber => "phonenumber",
    }
}

impl Default for InputType {
    fn default() -> Self {
        Self::TextQuery
    }
}

wire_enum! {
    /// Fields that can be requested from Find Place and Place Details
    pub enum PlaceField {
        AddressComponent => "address_component",
        BusinessStatus => "business_status",
        FormattedAddress => "formatted_address",
        Geometry => "geometry",
        Icon => "icon",
        Name => "name",
        Photo => "photo",
        PlaceId => "place_id",
        PlusCode => "plus_code",
        Type => "type",
        Url => "url",
        UtcOffset => "utc_offset",
        Vicinity => "vicinity",
        FormattedPhoneNumber => "formatted_phone_number",
        InternationalPhoneNumber => "international_phone_number",
        OpeningHours => "opening_hours",
        Website => "website",
        PriceLevel => "price_level",
        Rating => "rating",
        Reviews => "reviews",
        UserRatingsTotal => "user_ratings_total",
    }
}

wire_enum! {
    /// Supported place types for `type=` filters
    pub enum PlaceType {
        Accounting => "accounting",
        Airport => "airport",
        AmusementPark => "amusement_park",
        Aquarium => "aquarium",
        ArtGallery => "art_gallery",
        Atm => "atm",
        Bakery => "bakery",
        Bank => "bank",
        Bar => "bar",
        BeautySalon => "beauty_salon",
        BicycleStore => "bicycle_store",
        BookStore => "book_store",
        BusStation => "bus_station",
        Cafe => "cafe",
        Campground => "campground",
        CarRental => "car_rental",
        CarRepair => "car_repair",
        Church => "church",
        CityHall => "city_hall",
        ClothingStore => "clothing_store",
        ConvenienceStore => "convenience_store",
        Dentist => "dentist",
        DepartmentStore => "department_store",
        Doctor => "doctor",
        ElectronicsStore => "electronics_store",
        GasStation => "gas_station",
        Gym => "gym",
        Hospital => "hospital",
        Library => "library",
        Lodging => "lodging",
        Museum => "museum",
        NightClub => "night_club",
        Park => "park",
        Parking => "parking",
        Pharmacy => "pharmacy",
        Police => "police",
        PostOffice => "post_office",
        Restaurant => "restaurant",
        School => "school",
        ShoppingMall => "shopping_mall",
        Stadium => "stadium",
        SubwayStation => "subway_station",
        Supermarket => "supermarket",
        TouristAttraction => "tourist_attraction",
        TrainStation => "train_station",
        University => "university",
        Zoo => "zoo",
    }
}

wire_enum! {
    pub enum RankBy {
        Prominence => "prominence",
        Distance => "distance",
    }
}

wire_enum! {
    pub enum ReviewsSort {
        MostRelevant => "most_relevant",
        Newest => "newest",
    }
}

wire_enum! {
    /// Type collections accepted by Place Autocomplete
    pub enum AutocompleteType {
        Geocode => "geocode",
        Address => "address",
        Establishment => "establishment",
        Regions => "(regions)",
        Cities => "(cities)",
    }
}

/// `locationbias` for Find Place
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationBias {
    /// Bias by the caller's IP address
    IpBias,
    Point(LatLng),
    Circle { center: LatLng, radius_meters: u32 },
    Rectangle(Bounds),
}

impl LocationBias {
    pub fn to_wire(&self) -> String {
        match self {
            Self::IpBias => "ipbias".to_string(),
            Self::Point(p) => format!("point:{}", p.to_wire()),
            Self::Circle {
                center,
                radius_meters,
            } => format!("circle:{}@{}", radius_meters, center.to_wire()),
            Self::Rectangle(bounds) => format!("rectangle:{}", bounds.to_wire()),
        }
    }
}

/// `GET /place/findplacefromtext/json`
#[derive(Debug, Clone, Default)]
pub struct FindPlaceParameters {
    /// Required: text or phone number (E.164) depending on `input_type`
    pub input: String,
    pub input_type: InputType,
    pub fields: Vec<PlaceField>,
    pub location_bias: Option<LocationBias>,
    pub language: Option<String>,
}

impl FindPlaceParameters {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }
}

/// `GET /place/nearbysearch/json`
///
/// `radius` is required unless ranking by distance, in which case it must
/// be absent and a keyword or type must be given.
#[derive(Debug, Clone, Default)]
pub struct NearbySearchParameters {
    /// Required
    pub location: Option<LatLng>,
    /// Meters, at most 50 000
    pub radius: Option<u32>,
    pub keyword: Option<String>,
    pub place_type: Option<PlaceType>,
    /// 0 (most affordable) to 4 (most expensive)
    pub min_price: Option<u8>,
    pub max_price: Option<u8>,
    pub open_now: bool,
    pub rank_by: Option<RankBy>,
    pub page_token: Option<String>,
    pub language: Option<String>,
}

impl NearbySearchParameters {
    pub fn new(location: LatLng, radius: u32) -> Self {
        Self {
            location: Some(location),
            radius: Some(radius),
            ..Default::default()
        }
    }
}

/// `GET /place/textsearch/json`
#[derive(Debug, Clone, Default)]
pub struct TextSearchParameters {
    /// Required
    pub query: String,
    pub location: Option<LatLng>,
    pub radius: Option<u32>,
    pub min_price: Option<u8>,
    pub max_price: Option<u8>,
    pub open_now: bool,
    pub place_type: Option<PlaceType>,
    pub region: Option<String>,
    pub page_token: Option<String>,
    pub language: Option<String>,
}

impl TextSearchParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// `GET /place/details/json`
#[derive(Debug, Clone, Default)]
pub struct PlaceDetailsParameters {
    /// Required
    pub place_id: String,
    pub fields: Vec<PlaceField>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub session_token: Option<String>,
    pub reviews_sort: Option<ReviewsSort>,
    pub reviews_no_translations: Option<bool>,
}

impl PlaceDetailsParameters {
    pub fn new(place_id: impl Into<String>) -> Self {
        Self {
            place_id: place_id.into(),
            ..Default::default()
        }
    }
}

/// `GET /place/autocomplete/json`
#[derive(Debug, Clone, Default)]
pub struct AutocompleteParameters {
    /// Required
    pub input: String,
    /// Cursor position within `input`
    pub offset: Option<u32>,
    pub location: Option<LatLng>,
    pub radius: Option<u32>,
    pub strict_bounds: bool,
    pub types: Vec<AutocompleteType>,
    /// Up to five ISO 3166-1 alpha-2 codes
    pub countries: Vec<String>,
    pub language: Option<String>,
    pub session_token: Option<String>,
}

impl AutocompleteParameters {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_bias_wire() {
        let center = LatLng::new(37.7749, -122.4194);
        assert_eq!(LocationBias::IpBias.to_wire(), "ipbias");
        assert_eq!(LocationBias::Point(center).to_wire(), "point:37.7749,-122.4194");
        assert_eq!(
            LocationBias::Circle {
                center,
                radius_meters: 2000
            }
            .to_wire(),
            "circle:2000@37.7749,-122.4194"
        );
        let rect = Bounds::new(LatLng::new(1.0, 2.0), LatLng::new(3.0, 4.0));
        assert_eq!(LocationBias::Rectangle(rect).to_wire(), "rectangle:1,2|3,4");
    }

    #[test]
    fn test_default_input_type() {
        assert_eq!(FindPlaceParameters::default().input_type, InputType::TextQuery);
    }
}
