use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    coordinate::Coordinate,
    error::Error,
    measure::{self, Measurement},
};

/// What a path looks like once drawn, by number of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Empty,
    Point,
    Line,
    Polygon,
}

/// An ordered, caller-owned list of points being measured.
///
/// Appending the point that is already last is a no-op, so a repeated click
/// or a double submit does not add a zero-length segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    points: Vec<Coordinate>,
}

impl Path {
    pub fn new() -> Path {
        Path::default()
    }

    /// Appends `point` unless it is the same as the last one. Returns whether
    /// the point was added.
    pub fn push(&mut self, point: Coordinate) -> bool {
        if let Some(last) = self.points.last() {
            if last.approx_eq(&point) {
                debug!("Ignoring repeated point {}.", point);
                return false;
            }
        }
        self.points.push(point);
        true
    }

    /// Removes the last point.
    pub fn pop(&mut self) -> Option<Coordinate> {
        self.points.pop()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn last(&self) -> Option<&Coordinate> {
        self.points.last()
    }

    pub fn shape(&self) -> Shape {
        match self.points.len() {
            0 => Shape::Empty,
            1 => Shape::Point,
            2 => Shape::Line,
            _ => Shape::Polygon,
        }
    }

    /// Length of each segment, in order.
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|pair| measure::distance(&pair[0], &pair[1]))
            .collect()
    }

    pub fn measure(&self) -> Measurement {
        measure::measure(&self.points)
    }

    pub fn measure_closed(&self) -> Measurement {
        measure::measure_closed(&self.points)
    }
}

impl FromIterator<Coordinate> for Path {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        let mut path = Path::new();
        for point in iter {
            path.push(point);
        }
        path
    }
}

impl TryFrom<Vec<(f64, f64)>> for Path {
    type Error = Error;

    fn try_from(lat_lngs: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        lat_lngs.into_iter().map(Coordinate::try_from).collect()
    }
}
