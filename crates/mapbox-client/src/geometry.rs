//! Points and boxes
//!
//! MapBox is longitude-first everywhere: `lng,lat` in paths and query
//! strings, `[lng, lat]` and `[west, south, east, north]` in JSON.

use geocoding_core::fixed::{deserialize_fixed, serialize_fixed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// `lng,lat`
    pub fn to_wire(&self) -> String {
        format!("{},{}", self.longitude, self.latitude)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [longitude, latitude] = deserialize_fixed::<_, 2>(deserializer, "[longitude, latitude]")?;
        Ok(Self::new(longitude, latitude))
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_fixed([self.longitude, self.latitude], serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// `minLon,minLat,maxLon,maxLat`
    pub fn to_wire(&self) -> String {
        format!("{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

impl<'de> Deserialize<'de> for BoundingBox {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [west, south, east, north] =
            deserialize_fixed::<_, 4>(deserializer, "[west, south, east, north]")?;
        Ok(Self::new(west, south, east, north))
    }
}

impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_fixed([self.west, self.south, self.east, self.north], serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_wire_is_lng_first() {
        assert_eq!(Coordinate::new(78.91, 56.78).to_wire(), "78.91,56.78");
    }

    #[test]
    fn test_coordinate_json() {
        let c: Coordinate = serde_json::from_str("[-77.036547, 38.897675]").unwrap();
        assert_eq!(c.longitude, -77.036547);
        assert_eq!(c.latitude, 38.897675);
    }

    #[test]
    fn test_bbox_positional_order() {
        let bbox: BoundingBox =
            serde_json::from_str("[40.7528,-73.9964,40.7605,-73.9828]").unwrap();
        assert_eq!(bbox.west, 40.7528);
        assert_eq!(bbox.south, -73.9964);
        assert_eq!(bbox.east, 40.7605);
        assert_eq!(bbox.north, -73.9828);
        assert_eq!(
            serde_json::to_string(&bbox).unwrap(),
            "[40.7528,-73.9964,40.7605,-73.9828]"
        );
    }

    #[test]
    fn test_bbox_rejects_three_or_five_numbers() {
        let err = serde_json::from_str::<BoundingBox>("[40.7528,-73.9964,40.7605]").unwrap_err();
        assert!(err.to_string().contains("[west, south, east, north]"));
        assert!(
            serde_json::from_str::<BoundingBox>("[40.7528,-73.9964,40.7605,-73.9828,0]").is_err()
        );
    }
}
