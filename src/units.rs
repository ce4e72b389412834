use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::Error;

const FEET_PER_METER: f64 = 3.2808;

/// Units a length in meters can be shown in.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[display(fmt = "Feet")]
    Feet,
    #[display(fmt = "Meters")]
    Meters,
    #[display(fmt = "Miles")]
    Miles,
    #[display(fmt = "Kilometers")]
    Kilometers,
}

impl LengthUnit {
    /// Multiplier from meters.
    pub fn factor(&self) -> f64 {
        match self {
            LengthUnit::Feet => FEET_PER_METER,
            LengthUnit::Meters => 1.0,
            LengthUnit::Miles => FEET_PER_METER / 5280.0,
            LengthUnit::Kilometers => 0.001,
        }
    }

    pub fn decimals(&self) -> usize {
        match self {
            LengthUnit::Feet | LengthUnit::Meters => 0,
            LengthUnit::Miles | LengthUnit::Kilometers => 2,
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            LengthUnit::Feet => "ft",
            LengthUnit::Meters => "m",
            LengthUnit::Miles => "mi",
            LengthUnit::Kilometers => "km",
        }
    }

    pub fn convert(&self, meters: f64) -> f64 {
        meters * self.factor()
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feet" => Ok(LengthUnit::Feet),
            "meters" => Ok(LengthUnit::Meters),
            "miles" => Ok(LengthUnit::Miles),
            "kilometers" => Ok(LengthUnit::Kilometers),
            _ => Err(Error::UnknownUnit {
                name: s.to_string(),
            }),
        }
    }
}

/// Units an area in square meters can be shown in.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    #[display(fmt = "Acres")]
    Acres,
    #[display(fmt = "Hectares")]
    Hectares,
    #[display(fmt = "Sq Feet")]
    SqFeet,
    #[display(fmt = "Sq Meters")]
    SqMeters,
    #[display(fmt = "Sq Miles")]
    SqMiles,
}

impl AreaUnit {
    /// Multiplier from square meters.
    pub fn factor(&self) -> f64 {
        match self {
            AreaUnit::Acres => 0.00024711,
            AreaUnit::Hectares => 0.0001,
            AreaUnit::SqFeet => 10.7639,
            AreaUnit::SqMeters => 1.0,
            AreaUnit::SqMiles => 0.000000386102,
        }
    }

    pub fn decimals(&self) -> usize {
        match self {
            AreaUnit::SqFeet | AreaUnit::SqMeters => 0,
            AreaUnit::Acres | AreaUnit::Hectares | AreaUnit::SqMiles => 2,
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            AreaUnit::Acres => "ac",
            AreaUnit::Hectares => "ha",
            AreaUnit::SqFeet => "sq ft",
            AreaUnit::SqMeters => "sq m",
            AreaUnit::SqMiles => "sq mi",
        }
    }

    pub fn convert(&self, square_meters: f64) -> f64 {
        square_meters * self.factor()
    }
}

impl FromStr for AreaUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "acres" => Ok(AreaUnit::Acres),
            "hectares" => Ok(AreaUnit::Hectares),
            "sqfeet" => Ok(AreaUnit::SqFeet),
            "sqmeters" => Ok(AreaUnit::SqMeters),
            "sqmiles" => Ok(AreaUnit::SqMiles),
            _ => Err(Error::UnknownUnit {
                name: s.to_string(),
            }),
        }
    }
}
