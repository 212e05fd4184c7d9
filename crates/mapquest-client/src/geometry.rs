use serde::{Deserialize, Serialize};

/// `{"lat": .., "lng": ..}` in JSON, `lat,lng` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn to_wire(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

/// Search box given by its upper-left and lower-right corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub upper_left: Coordinate,
    pub lower_right: Coordinate,
}

impl BoundingBox {
    pub fn new(upper_left: Coordinate, lower_right: Coordinate) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    /// `ul_lat,ul_lng,lr_lat,lr_lng`
    pub fn to_wire(&self) -> String {
        format!("{},{}", self.upper_left.to_wire(), self.lower_right.to_wire())
    }
}
