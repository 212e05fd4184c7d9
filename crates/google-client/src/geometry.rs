use serde::{Deserialize, Serialize};

/// Latitude/longitude pair, `{"lat": .., "lng": ..}` in JSON and `lat,lng` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn to_wire(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

/// Rectangle given by its north-east and south-west corners
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Bounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

impl Bounds {
    pub fn new(southwest: LatLng, northeast: LatLng) -> Self {
        Self {
            northeast,
            southwest,
        }
    }

    /// `sw_lat,sw_lng|ne_lat,ne_lng`
    pub fn to_wire(&self) -> String {
        format!("{}|{}", self.southwest.to_wire(), self.northeast.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_wire() {
        assert_eq!(LatLng::new(56.78, 78.91).to_wire(), "56.78,78.91");
    }

    #[test]
    fn test_bounds_wire_is_southwest_first() {
        let bounds = Bounds::new(LatLng::new(34.172684, -118.604794), LatLng::new(34.236144, -118.500938));
        assert_eq!(bounds.to_wire(), "34.172684,-118.604794|34.236144,-118.500938");
    }

    #[test]
    fn test_bounds_json() {
        let json = r#"{"northeast":{"lat":37.42,"lng":-122.08},"southwest":{"lat":37.41,"lng":-122.09}}"#;
        let bounds: Bounds = serde_json::from_str(json).unwrap();
        assert_eq!(bounds.northeast, LatLng::new(37.42, -122.08));
        assert_eq!(bounds.southwest, LatLng::new(37.41, -122.09));
    }
}
