mod coordinate;
mod error;
mod format;
pub mod measure;
mod path;
mod units;

pub use coordinate::Coordinate;
pub use error::Error;
pub use format::{number_format, DisplayOptions, MeasurementDisplay};
pub use measure::{measure, measure_closed, measure_lat_lngs, Measurement};
pub use path::{Path, Shape};
pub use units::{AreaUnit, LengthUnit};
