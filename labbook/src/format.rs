//! Display rules for measurements
//!
//! Typed measurements echo the precision of their source text. Computed
//! measurements are rounded so the uncertainty keeps one significant figure
//! and the value is rounded to the same decimal place.

use crate::Measurement;
use std::fmt;

/// Separator between value and uncertainty in rendered output
pub const PLUS_MINUS: &str = "±";

/// Render a measurement as `"<value> ± <uncertainty>"`.
///
/// Computed measurements with zero uncertainty fall back to the bare value,
/// always with a fractional part (`6.0`, `1000.0`).
pub fn format_measurement(measurement: &Measurement) -> String {
    if let Some(places) = measurement.manual_precision {
        return fixed(measurement.value, measurement.uncertainty, places);
    }

    if measurement.uncertainty == 0.0 {
        return format!("{:?}", measurement.value);
    }

    let magnitude = measurement.uncertainty.log10().floor();
    let scale = 10f64.powf(magnitude);

    let rounded_uncertainty = (measurement.uncertainty / scale).round_ties_even() * scale;
    let rounded_value = (measurement.value / scale).round_ties_even() * scale;

    // max() discards NaN, so non-finite uncertainties render with 0 places
    let places = (-magnitude).max(0.0) as usize;

    fixed(rounded_value, rounded_uncertainty, places)
}

fn fixed(value: f64, uncertainty: f64, places: usize) -> String {
    format!(
        "{:.*} {} {:.*}",
        places, value, PLUS_MINUS, places, uncertainty
    )
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_measurement(self))
    }
}
