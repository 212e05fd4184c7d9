//! Points and areas, shared by request parameters and response models
//!
//! Bing writes coordinates latitude-first everywhere: `lat,lng` in query
//! strings and `[lat, lng]` in JSON. Bounding boxes are
//! `south,west,north,east` in both.

use geocoding_core::fixed::{deserialize_fixed, serialize_fixed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A WGS84 point
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

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [latitude, longitude] = deserialize_fixed::<_, 2>(deserializer, "[latitude, longitude]")?;
        Ok(Self::new(latitude, longitude))
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_fixed([self.latitude, self.longitude], serializer)
    }
}

/// Rectangular area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// `south,west,north,east`
    pub fn to_wire(&self) -> String {
        format!("{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}

impl<'de> Deserialize<'de> for BoundingBox {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [south, west, north, east] =
            deserialize_fixed::<_, 4>(deserializer, "[south, west, north, east]")?;
        Ok(Self::new(south, west, north, east))
    }
}

impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_fixed([self.south, self.west, self.north, self.east], serializer)
    }
}

/// Circular area around a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Coordinate,
    pub radius_meters: u32,
}

impl Circle {
    pub fn new(center: Coordinate, radius_meters: u32) -> Self {
        Self {
            center,
            radius_meters,
        }
    }

    /// `lat,lng,radius`
    pub fn to_wire(&self) -> String {
        format!("{},{}", self.center.to_wire(), self.radius_meters)
    }
}
