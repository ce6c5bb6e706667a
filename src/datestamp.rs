//! Date stamps for daily log headings.
//!
//! A stamp reads `YYYY-MM-DD weekday`, with the weekday taken from a fixed
//! lowercase table starting on Monday.

use chrono::{Datelike, Local, NaiveDate};

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

#[must_use]
/// Lowercase weekday name for `date`.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

#[must_use]
/// Formats `date` as `YYYY-MM-DD weekday`.
pub fn date_stamp(date: NaiveDate) -> String {
    format!("{} {}", date.format("%Y-%m-%d"), weekday_name(date))
}

#[must_use]
/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
#[path = "tests/datestamp.rs"]
mod tests;
