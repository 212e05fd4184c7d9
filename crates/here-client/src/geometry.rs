//! Positions and search areas
//!
//! HERE writes positions latitude-first (`at=lat,lng`) but bounding boxes
//! west-first (`bbox:west,south,east,north`).

use serde::{Deserialize, Serialize};

/// A WGS84 point, `{"lat": .., "lng": ..}` in JSON
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `lat,lng`
    pub fn to_wire(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

/// Rectangular area, also the shape of `mapView` in responses
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
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

    /// `west,south,east,north`
    pub fn to_wire(&self) -> String {
        format!("{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

/// Value of the `in=` filter
#[derive(Debug, Clone, PartialEq)]
pub enum AreaFilter {
    /// ISO 3166-1 alpha-3 codes, e.g. `USA`
    CountryCode(Vec<String>),
    Circle { center: Coordinate, radius_meters: u32 },
    BoundingBox(BoundingBox),
}

impl AreaFilter {
    pub fn countries<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CountryCode(codes.into_iter().map(Into::into).collect())
    }

    pub fn to_wire(&self) -> String {
        match self {
            Self::CountryCode(codes) => format!("countryCode:{}", codes.join(",")),
            Self::Circle {
                center,
                radius_meters,
            } => format!("circle:{};r={}", center.to_wire(), radius_meters),
            Self::BoundingBox(bbox) => format!("bbox:{}", bbox.to_wire()),
        }
    }
}
