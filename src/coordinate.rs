use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::Error, measure};

/// Two coordinates closer than this in both components are the same point.
const SAME_POINT_MARGIN: f64 = 1.0E-9;

/// A WGS-84 position in decimal degrees.
///
/// Always valid: the only way to build one is through [`Coordinate::new`],
/// which rejects non-finite and out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Validates and builds a coordinate.
    ///
    /// ```
    /// # use map_measure::{Coordinate, Error};
    /// let london = Coordinate::new(51.5072, -0.1276).unwrap();
    /// assert_eq!(london.lat(), 51.5072);
    ///
    /// assert_eq!(
    ///     Coordinate::new(91.0, 0.0),
    ///     Err(Error::LatitudeOutOfRange { lat: 91.0 })
    /// );
    /// ```
    pub fn new(lat: f64, lng: f64) -> Result<Coordinate, Error> {
        if !lat.is_finite() {
            return Err(Error::NotFinite { value: lat });
        }
        if !lng.is_finite() {
            return Err(Error::NotFinite { value: lng });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::LatitudeOutOfRange { lat });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(Error::LongitudeOutOfRange { lng });
        }
        Ok(Coordinate { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        measure::distance(self, other)
    }

    pub fn approx_eq(&self, other: &Coordinate) -> bool {
        (self.lat - other.lat).abs() <= SAME_POINT_MARGIN
            && (self.lng - other.lng).abs() <= SAME_POINT_MARGIN
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = Error;

    fn try_from((lat, lng): (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::new(lat, lng)
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord { x: c.lng, y: c.lat }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.lng, c.lat)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s.split_once(',').ok_or_else(|| Error::InvalidFormat {
            input: s.to_string(),
        })?;
        let parse = |part: &str| {
            part.trim().parse::<f64>().map_err(|_| Error::InvalidNumber {
                input: part.trim().to_string(),
            })
        };
        Coordinate::new(parse(lat)?, parse(lng)?)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            lat: f64,
            lng: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Coordinate::new(raw.lat, raw.lng).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            Coordinate::new(91.0, 0.0),
            Err(Error::LatitudeOutOfRange { lat: 91.0 })
        );
        assert_eq!(
            Coordinate::new(0.0, -181.0),
            Err(Error::LongitudeOutOfRange { lng: -181.0 })
        );
        assert_eq!(
            Coordinate::new(0.0, f64::INFINITY),
            Err(Error::NotFinite {
                value: f64::INFINITY
            })
        );
        assert!(matches!(
            Coordinate::new(f64::NAN, 0.0),
            Err(Error::NotFinite { value }) if value.is_nan()
        ));
    }

    #[test]
    fn parses_text() {
        let c: Coordinate = " 39.953338 , -75.163471".parse().unwrap();
        assert_eq!(c.lat(), 39.953338);
        assert_eq!(c.lng(), -75.163471);

        assert_eq!(
            "39.95".parse::<Coordinate>(),
            Err(Error::InvalidFormat {
                input: "39.95".to_string()
            })
        );
        assert_eq!(
            "north,1".parse::<Coordinate>(),
            Err(Error::InvalidNumber {
                input: "north".to_string()
            })
        );
        assert_eq!(
            "100,1".parse::<Coordinate>(),
            Err(Error::LatitudeOutOfRange { lat: 100.0 })
        );
    }

    #[test]
    fn same_point_margin() {
        let a = Coordinate::new(10.0, 20.0).unwrap();
        let b = Coordinate::new(10.0 + 1.0E-10, 20.0).unwrap();
        let c = Coordinate::new(10.0001, 20.0).unwrap();
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&c));
    }

    #[test]
    fn deserialize_validates() {
        let ok: Coordinate = serde_json::from_str(r#"{"lat": 1.5, "lng": 2.5}"#).unwrap();
        assert_eq!(ok, Coordinate::new(1.5, 2.5).unwrap());

        let bad = serde_json::from_str::<Coordinate>(r#"{"lat": 95.0, "lng": 2.5}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn geo_axes_are_lng_lat() {
        let c = Coordinate::new(51.5, -0.12).unwrap();
        let point = geo::Point::from(c);
        assert_eq!((point.x(), point.y()), (-0.12, 51.5));
        assert_eq!(geo::Coord::from(c), geo::Coord { x: -0.12, y: 51.5 });
    }

    #[test]
    fn display() {
        let c = Coordinate::new(1.5, -2.25).unwrap();
        assert_eq!(c.to_string(), "1.500000, -2.250000");
    }
}
