//! Human readable measurement strings, e.g. `1,000 Feet (0.19 Miles)`.

use serde::{Deserialize, Serialize};

use crate::{
    measure::Measurement,
    units::{AreaUnit, LengthUnit},
};

/// Formats `value` with `decimals` digits after `dec_point`, grouping the
/// integer part in threes with `thousands_sep`.
///
/// ```
/// # use map_measure::number_format;
/// assert_eq!(number_format(1234567.891, 2, '.', Some(',')), "1,234,567.89");
/// assert_eq!(number_format(1234567.891, 0, ',', Some('.')), "1.234.568");
/// assert_eq!(number_format(-0.001, 1, '.', None), "0.0");
/// ```
pub fn number_format(
    value: f64,
    decimals: usize,
    dec_point: char,
    thousands_sep: Option<char>,
) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }

    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            if let Some(sep) = thousands_sep {
                out.push(sep);
            }
        }
        out.push(digit);
    }

    if let Some(fraction) = fraction {
        out.push(dec_point);
        out.push_str(fraction);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementDisplay {
    pub length_display: String,
    pub area_display: String,
}

/// Which units and number style to present measurements in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub primary_length_unit: LengthUnit,
    pub secondary_length_unit: Option<LengthUnit>,
    pub primary_area_unit: AreaUnit,
    pub secondary_area_unit: Option<AreaUnit>,
    pub dec_point: char,
    pub thousands_sep: Option<char>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            primary_length_unit: LengthUnit::Feet,
            secondary_length_unit: None,
            primary_area_unit: AreaUnit::SqFeet,
            secondary_area_unit: None,
            dec_point: '.',
            thousands_sep: Some(','),
        }
    }
}

impl DisplayOptions {
    fn number(&self, value: f64, decimals: usize) -> String {
        number_format(value, decimals, self.dec_point, self.thousands_sep)
    }

    fn length(&self, meters: f64, unit: LengthUnit, short: bool) -> String {
        let number = self.number(unit.convert(meters), unit.decimals());
        if short {
            format!("{} {}", number, unit.short_label())
        } else {
            format!("{} {}", number, unit)
        }
    }

    fn area(&self, square_meters: f64, unit: AreaUnit, short: bool) -> String {
        let number = self.number(unit.convert(square_meters), unit.decimals());
        if short {
            format!("{} {}", number, unit.short_label())
        } else {
            format!("{} {}", number, unit)
        }
    }

    fn build(&self, measurement: &Measurement, short: bool) -> MeasurementDisplay {
        let mut length_display = self.length(measurement.length, self.primary_length_unit, short);
        if let Some(unit) = self.secondary_length_unit {
            let secondary = self.length(measurement.length, unit, short);
            length_display = format!("{} ({})", length_display, secondary);
        }

        let mut area_display = self.area(measurement.area, self.primary_area_unit, short);
        if let Some(unit) = self.secondary_area_unit {
            let secondary = self.area(measurement.area, unit, short);
            area_display = format!("{} ({})", area_display, secondary);
        }

        MeasurementDisplay {
            length_display,
            area_display,
        }
    }

    /// Long form: `100 Feet (0.02 Miles)`.
    pub fn display(&self, measurement: &Measurement) -> MeasurementDisplay {
        self.build(measurement, false)
    }

    /// Short form: `100 ft (0.02 mi)`.
    pub fn short_display(&self, measurement: &Measurement) -> MeasurementDisplay {
        self.build(measurement, true)
    }

    /// Short length of a single segment.
    pub fn segment_display(&self, meters: f64) -> String {
        let measurement = Measurement {
            length: meters,
            area: 0.0,
        };
        self.build(&measurement, true).length_display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(number_format(0.0, 0, '.', Some(',')), "0");
        assert_eq!(number_format(999.0, 0, '.', Some(',')), "999");
        assert_eq!(number_format(1000.0, 0, '.', Some(',')), "1,000");
        assert_eq!(number_format(123456.0, 0, '.', Some(',')), "123,456");
        assert_eq!(number_format(1234567.0, 0, '.', None), "1234567");
        assert_eq!(number_format(-1234.25, 2, '.', Some(',')), "-1,234.25");
    }

    #[test]
    fn rounds_to_decimals() {
        assert_eq!(number_format(0.18939, 2, '.', Some(',')), "0.19");
        assert_eq!(number_format(2.0, 2, ',', Some(' ')), "2,00");
        assert_eq!(number_format(999.9, 0, '.', Some(',')), "1,000");
    }

    #[test]
    fn default_display() {
        let options = DisplayOptions::default();
        let display = options.display(&Measurement {
            length: 304.8,
            area: 1.0e10,
        });
        assert_eq!(display.length_display, "1,000 Feet");
        assert_eq!(display.area_display, "107,639,000,000 Sq Feet");
    }

    #[test]
    fn secondary_units() {
        let options = DisplayOptions {
            secondary_length_unit: Some(LengthUnit::Miles),
            primary_area_unit: AreaUnit::Hectares,
            secondary_area_unit: Some(AreaUnit::Acres),
            ..DisplayOptions::default()
        };
        let measurement = Measurement {
            length: 304.8,
            area: 40_000.0,
        };

        let long = options.display(&measurement);
        assert_eq!(long.length_display, "1,000 Feet (0.19 Miles)");
        assert_eq!(long.area_display, "4.00 Hectares (9.88 Acres)");

        let short = options.short_display(&measurement);
        assert_eq!(short.length_display, "1,000 ft (0.19 mi)");
        assert_eq!(short.area_display, "4.00 ha (9.88 ac)");
    }

    #[test]
    fn segment() {
        let options = DisplayOptions {
            primary_length_unit: LengthUnit::Kilometers,
            ..DisplayOptions::default()
        };
        assert_eq!(options.segment_display(111_195.08), "111.20 km");
    }
}
