//! Request parameters for `/forward` and `/reverse`

use std::net::IpAddr;

/// A WGS84 point, `lat,lng` on the wire
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

    pub fn to_wire(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// What to reverse geocode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReverseQuery {
    Coordinate(Coordinate),
    Ip(IpAddr),
}

impl ReverseQuery {
    pub fn to_wire(&self) -> String {
        match self {
            Self::Coordinate(c) => c.to_wire(),
            Self::Ip(ip) => ip.to_string(),
        }
    }
}

/// Optional response sections and filters shared by both endpoints
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// ISO 3166 alpha-2 or alpha-3 codes; `-` prefix excludes
    pub countries: Vec<String>,
    /// ISO 639 code, e.g. `de`
    pub language: Option<String>,
    pub country_module: Option<bool>,
    pub sun_module: Option<bool>,
    pub timezone_module: Option<bool>,
    pub bbox_module: Option<bool>,
    /// 1 to 80
    pub limit: Option<u32>,
    /// Restrict the response to these fields, e.g. `results.latitude`
    pub fields: Vec<String>,
}

/// `GET /forward`
#[derive(Debug, Clone, Default)]
pub struct ForwardParameters {
    /// Required
    pub query: String,
    /// Region or state name
    pub region: Option<String>,
    pub options: RequestOptions,
}

impl ForwardParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// `GET /reverse`
#[derive(Debug, Clone, Default)]
pub struct ReverseParameters {
    /// Required
    pub query: Option<ReverseQuery>,
    pub options: RequestOptions,
}

impl ReverseParameters {
    pub fn new(query: ReverseQuery) -> Self {
        Self {
            query: Some(query),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_query_wire() {
        let point = ReverseQuery::Coordinate(Coordinate::new(56.78, 78.91));
        assert_eq!(point.to_wire(), "56.78,78.91");
        let ip = ReverseQuery::Ip("8.8.8.8".parse().unwrap());
        assert_eq!(ip.to_wire(), "8.8.8.8");
    }
}
