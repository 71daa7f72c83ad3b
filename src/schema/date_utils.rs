//! Acquisition year parsing.

use chrono::{Datelike, NaiveDate};

/// Date formats accepted for full acquisition dates
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// Parse an acquisition year from a raw cell
///
/// Accepts a plain integer year (`1996`), a float rendering of one
/// (`1996.0`, as produced by exports of columns with gaps) or a full date in
/// one of [`DATE_FORMATS`].
#[must_use]
pub fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(year) = s.parse::<i32>() {
        return Some(year);
    }

    if let Ok(value) = s.parse::<f64>() {
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX) {
            return Some(value as i32);
        }
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .map(|date| date.year())
}
