//! Length and area of a path of WGS-84 coordinates.
//!
//! Lengths are in meters, areas in square meters. Both are computed on a
//! sphere, the way web mapping libraries do: haversine distances on the mean
//! Earth radius and Chamberlain–Duquette ring area on the equatorial radius.

use std::f64::consts::PI;

use geo::{ChamberlainDuquetteArea, Coord, HaversineDistance, LineString, Point, Polygon};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{coordinate::Coordinate, error::Error};

/// Mean Earth radius (IUGG), the radius haversine distances are taken on.
pub const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Meters along the path.
    pub length: f64,
    /// Square meters enclosed by the implicitly closed path.
    pub area: f64,
}

/// Great-circle distance between two coordinates.
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let d = Point::from(*a).haversine_distance(&Point::from(*b));
    // Near-antipodal pairs can round the haversine term past 1.
    if d.is_nan() {
        PI * MEAN_EARTH_RADIUS
    } else {
        d
    }
}

/// Sum of the distances between consecutive coordinates.
pub fn length(points: &[Coordinate]) -> f64 {
    points.windows(2).map(|pair| distance(&pair[0], &pair[1])).sum()
}

/// Unsigned area of the ring formed by `points`, closing back to the first
/// point. Zero below three points.
pub fn area(points: &[Coordinate]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let ring: LineString<f64> = points.iter().map(|&p| Coord::from(p)).collect();
    Polygon::new(ring, vec![]).chamberlain_duquette_unsigned_area()
}

/// Measures an open path: the length follows the points in order, the area
/// treats them as a closed ring.
///
/// ```
/// # use map_measure::{measure, Coordinate};
/// let path = [
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(0.0, 1.0).unwrap(),
/// ];
/// let m = measure(&path);
/// assert!((m.length - 111_195.08).abs() < 1.0);
/// assert_eq!(m.area, 0.0);
/// ```
pub fn measure(points: &[Coordinate]) -> Measurement {
    let measurement = Measurement {
        length: length(points),
        area: area(points),
    };
    trace!(
        "Measured {} points: {} m, {} m².",
        points.len(),
        measurement.length,
        measurement.area
    );
    measurement
}

/// Measures a finished shape. With three or more points the length also
/// covers the segment from the last point back to the first.
pub fn measure_closed(points: &[Coordinate]) -> Measurement {
    let mut measurement = measure(points);
    if points.len() > 2 {
        measurement.length += distance(&points[points.len() - 1], &points[0]);
    }
    measurement
}

/// Validates raw `(lat, lng)` pairs, then measures them.
pub fn measure_lat_lngs(lat_lngs: &[(f64, f64)]) -> Result<Measurement, Error> {
    let points = lat_lngs
        .iter()
        .map(|&pair| Coordinate::try_from(pair))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(measure(&points))
}
