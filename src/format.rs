//! Display formatting shared by the recipe card

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Rendered in place of a date that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Number of slots in the rating row
pub const STAR_SLOTS: usize = 5;

const DATE_OUTPUT_FORMAT: &str = "%d.%m.%Y";

const DATETIME_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse the date part of a backend timestamp
///
/// Timestamps with an offset keep the calendar date of that offset.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }

    DATETIME_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|datetime| datetime.date())
        .or_else(|| NaiveDate::parse_from_str(input, "%Y-%m-%d").ok())
}

/// Format a timestamp as `DD.MM.YYYY`, or [`INVALID_DATE`]
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(date) => date.format(DATE_OUTPUT_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Up to two uppercase initials, one per whitespace-separated name part
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Filled,
    Empty,
}

/// The rating row, or `None` when there is nothing to show
///
/// A rating of 0 renders no row at all, same as an absent rating. Ratings
/// above five fill every slot.
pub fn star_slots(rating: Option<i64>) -> Option<[Star; STAR_SLOTS]> {
    let rating = rating.filter(|&r| r != 0)?;
    let mut slots = [Star::Empty; STAR_SLOTS];
    for (i, slot) in slots.iter_mut().enumerate() {
        if (i as i64) < rating {
            *slot = Star::Filled;
        }
    }
    Some(slots)
}

/// Duration label such as `45 min`; zero counts as absent
///
/// Whole minutes print without a fraction, so `45.0` reads `45 min`.
pub fn duration_label(minutes: Option<f64>) -> Option<String> {
    minutes.filter(|&m| m != 0.0).map(|m| format!("{m} min"))
}
