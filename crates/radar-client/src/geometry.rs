//! Request coordinates are `lat,lng`; GeoJSON responses are `[lng, lat]`.

use geocoding_core::fixed::{deserialize_fixed, serialize_fixed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `lat,lng`
    pub fn to_wire(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// GeoJSON position, `[longitude, latitude]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
}

impl Position {
    pub fn to_coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [longitude, latitude] = deserialize_fixed::<_, 2>(deserializer, "[longitude, latitude]")?;
        Ok(Self {
            longitude,
            latitude,
        })
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_fixed([self.longitude, self.latitude], serializer)
    }
}

/// `{"type": "Point", "coordinates": [lng, lat]}`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Point {
    #[serde(rename = "type")]
    pub kind: PointKind,
    pub coordinates: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PointKind {
    Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_wire_is_lat_first() {
        assert_eq!(Coordinate::new(56.78, 78.91).to_wire(), "56.78,78.91");
    }

    #[test]
    fn test_geojson_point_is_lng_first() {
        let point: Point =
            serde_json::from_str(r#"{"type": "Point", "coordinates": [-73.9866, 40.7339]}"#)
                .unwrap();
        assert_eq!(point.coordinates.to_coordinate(), Coordinate::new(40.7339, -73.9866));
    }

    #[test]
    fn test_geojson_point_rejects_three_numbers() {
        let err = serde_json::from_str::<Point>(r#"{"type": "Point", "coordinates": [1, 2, 3]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("[longitude, latitude]"));
    }
}
