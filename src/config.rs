use std::{env::VarError, str::FromStr};

use map_measure::{AreaUnit, DisplayOptions, LengthUnit};

use crate::GenericError;

pub struct Config {
    pub discord_token: String,
    pub display: DisplayOptions,
}

impl Config {
    pub fn from_env() -> Result<Self, GenericError> {
        Ok(Config {
            discord_token: dotenv::var("DISCORD_TOKEN")?,
            display: display_options(optional_var)?,
        })
    }
}

fn optional_var(key: &str) -> Result<Option<String>, GenericError> {
    match dotenv::var(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(dotenv::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(why) => Err(why.into()),
    }
}

fn parsed<T, F>(lookup: &F, key: &str) -> Result<Option<T>, GenericError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Result<Option<String>, GenericError>,
{
    lookup(key)?
        .map(|value| value.parse::<T>())
        .transpose()
        .map_err(Into::into)
}

/// Reads `MEASURE_*` settings; anything unset keeps its default.
/// `MEASURE_THOUSANDS_SEP=none` turns grouping off.
fn display_options<F>(lookup: F) -> Result<DisplayOptions, GenericError>
where
    F: Fn(&str) -> Result<Option<String>, GenericError>,
{
    let defaults = DisplayOptions::default();
    let thousands_sep = match lookup("MEASURE_THOUSANDS_SEP")? {
        None => defaults.thousands_sep,
        Some(value) if value.eq_ignore_ascii_case("none") => None,
        Some(value) => value.chars().next(),
    };

    Ok(DisplayOptions {
        primary_length_unit: parsed::<LengthUnit, _>(&lookup, "MEASURE_PRIMARY_LENGTH_UNIT")?
            .unwrap_or(defaults.primary_length_unit),
        secondary_length_unit: parsed(&lookup, "MEASURE_SECONDARY_LENGTH_UNIT")?,
        primary_area_unit: parsed::<AreaUnit, _>(&lookup, "MEASURE_PRIMARY_AREA_UNIT")?
            .unwrap_or(defaults.primary_area_unit),
        secondary_area_unit: parsed(&lookup, "MEASURE_SECONDARY_AREA_UNIT")?,
        dec_point: lookup("MEASURE_DEC_POINT")?
            .and_then(|value| value.chars().next())
            .unwrap_or(defaults.dec_point),
        thousands_sep,
    })
}
