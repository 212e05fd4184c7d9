//! ArcGIS geometry objects
//!
//! Points are `x,y` (longitude first in WGS84) and extents are
//! `xmin,ymin,xmax,ymax`, both as query strings and as JSON objects.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_lat_lng(latitude: f64, longitude: f64) -> Self {
        Self::new(longitude, latitude)
    }

    /// `x,y`
    pub fn to_wire(&self) -> String {
        format!("{},{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Extent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Extent {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// `xmin,ymin,xmax,ymax`
    pub fn to_wire(&self) -> String {
        format!("{},{},{},{}", self.xmin, self.ymin, self.xmax, self.ymax)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpatialReference {
    pub wkid: Option<u32>,
    #[serde(rename = "latestWkid")]
    pub latest_wkid: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_x_first() {
        assert_eq!(Point::from_lat_lng(56.78, 78.91).to_wire(), "78.91,56.78");
    }

    #[test]
    fn test_extent_wire() {
        let extent = Extent::new(-117.2, 34.0, -117.1, 34.1);
        assert_eq!(extent.to_wire(), "-117.2,34,-117.1,34.1");
    }
}
