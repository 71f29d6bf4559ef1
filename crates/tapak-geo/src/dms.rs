//! Degrees/minutes/seconds display formatting
//!
//! The map sheet labels coordinates as `D° M' S.sss" H`. The operating
//! region is entirely east of the prime meridian and south of the
//! equator, so the hemisphere letter is fixed per axis (E / S) and the
//! magnitude is used.

use crate::error::CoordinateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl Axis {
    fn hemisphere(&self) -> char {
        match self {
            Axis::Longitude => 'E',
            Axis::Latitude => 'S',
        }
    }
}

/// Format a decimal-degree value as `D° M' S.sss" H`.
///
/// Degrees and minutes truncate; seconds round to 3 decimals. A seconds
/// value that rounds to 60.000 carries into minutes (and minutes into
/// degrees) so the label never reads `59' 60.000"`.
pub fn format_dms(value: f64, axis: Axis) -> Result<String, CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NonFinite(value));
    }

    let magnitude = value.abs();
    let mut degrees = magnitude.trunc() as u64;
    let minutes_decimal = (magnitude - degrees as f64) * 60.0;
    let mut minutes = minutes_decimal.trunc() as u64;
    let seconds = (minutes_decimal - minutes as f64) * 60.0;

    // Round to millisecond-of-arc first, then carry.
    let mut second_millis = (seconds * 1000.0).round() as u64;
    if second_millis >= 60_000 {
        second_millis -= 60_000;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        degrees += 1;
    }

    Ok(format!(
        "{}° {}' {}.{:03}\" {}",
        degrees,
        minutes,
        second_millis / 1000,
        second_millis % 1000,
        axis.hemisphere()
    ))
}
