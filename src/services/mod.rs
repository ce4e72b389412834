use map_measure::{Coordinate, Measurement, Path, Shape};
use serde::{Deserialize, Serialize};

pub mod database;
pub mod geocoding;

/// A finished measurement as it is saved for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMeasurement {
    pub user_id: String,
    pub user_name: String,
    pub points: Vec<Coordinate>,
    pub length: f64,
    pub area: f64,
}

impl StoredMeasurement {
    pub fn new(user_id: String, user_name: String, path: &Path, measurement: Measurement) -> Self {
        StoredMeasurement {
            user_id,
            user_name,
            points: path.points().to_vec(),
            length: measurement.length,
            area: measurement.area,
        }
    }

    pub fn measurement(&self) -> Measurement {
        Measurement {
            length: self.length,
            area: self.area,
        }
    }

    pub fn shape(&self) -> Shape {
        self.points.iter().copied().collect::<Path>().shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_round_trip() {
        let path = Path::try_from(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]).unwrap();
        let record = StoredMeasurement::new(
            "42".to_string(),
            "tetra".to_string(),
            &path,
            path.measure_closed(),
        );
        assert_eq!(record.shape(), Shape::Polygon);

        let row = serde_json::to_value(&record).unwrap();
        assert_eq!(row["points"][1]["lng"], 1.0);

        // Rows come back with database-generated columns as well.
        let mut row = row;
        row["id"] = serde_json::json!(7);
        let back: StoredMeasurement = serde_json::from_value(row).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.measurement(), path.measure_closed());
    }
}
