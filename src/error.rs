use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum Error {
    #[error("Coordinate value '{value}' is not a finite number")]
    NotFinite { value: f64 },

    #[error("Latitude '{lat}' is out of range (valid: -90..=90)")]
    LatitudeOutOfRange { lat: f64 },

    #[error("Longitude '{lng}' is out of range (valid: -180..=180)")]
    LongitudeOutOfRange { lng: f64 },

    #[error("'{input}' is not a coordinate (expected 'lat,lng')")]
    InvalidFormat { input: String },

    #[error("'{input}' is not a number")]
    InvalidNumber { input: String },

    #[error("Unknown unit '{name}'")]
    UnknownUnit { name: String },
}
