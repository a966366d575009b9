//! Date and duration helpers used by the token table and data bindings.

use std::fmt::Write;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interpreter::count_with_unit;

/// Output form of a normalized date: UTC midnight with milliseconds.
const NORMALIZED_FORMAT: &str = "%Y-%m-%dT00:00:00.000Z";

/// A date that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid {field}: '{value}'")]
    Invalid { field: &'static str, value: String },
}

/// The dates a retirement quote request is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementDates {
    pub retirement_date: String,
    pub date_of_birth: String,
    pub earliest_retirement_date: String,
    pub latest_retirement_date: String,
}

/// Parse an ISO date or date-time.
///
/// Date-times with an offset keep the calendar date as written in that
/// offset, so `1990-05-10T00:00:00+01:00` is 10 May 1990, not 9 May.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Normalize one date string to `YYYY-MM-DDT00:00:00.000Z`.
pub fn normalize_date(field: &'static str, value: &str) -> Result<String, DateError> {
    parse_date(value)
        .map(|date| date.format(NORMALIZED_FORMAT).to_string())
        .ok_or_else(|| DateError::Invalid {
            field,
            value: value.to_string(),
        })
}

/// Normalize every date of a quote request to UTC midnight of its calendar date.
///
/// ```
/// use mdp_content::dates::{RetirementDates, normalize_retirement_dates};
///
/// let dates = RetirementDates {
///     retirement_date: "2030-06-01T00:00:00+01:00".into(),
///     date_of_birth: "1965-06-01".into(),
///     earliest_retirement_date: "2020-06-01T23:30:00-05:00".into(),
///     latest_retirement_date: "2040-06-01T00:00:00Z".into(),
/// };
/// let normalized = normalize_retirement_dates(&dates).unwrap();
/// assert_eq!(normalized.retirement_date, "2030-06-01T00:00:00.000Z");
/// assert_eq!(normalized.earliest_retirement_date, "2020-06-01T00:00:00.000Z");
/// ```
pub fn normalize_retirement_dates(dates: &RetirementDates) -> Result<RetirementDates, DateError> {
    Ok(RetirementDates {
        retirement_date: normalize_date("retirementDate", &dates.retirement_date)?,
        date_of_birth: normalize_date("dateOfBirth", &dates.date_of_birth)?,
        earliest_retirement_date: normalize_date(
            "earliestRetirementDate",
            &dates.earliest_retirement_date,
        )?,
        latest_retirement_date: normalize_date(
            "latestRetirementDate",
            &dates.latest_retirement_date,
        )?,
    })
}

/// Format a date with a `chrono` format string. Invalid format strings give `None`.
pub fn format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Parse then format an ISO date string.
pub fn format_date_str(value: &str, format: &str) -> Option<String> {
    parse_date(value).and_then(|date| format_date(date, format))
}

/// Whole years between `date_of_birth` and `today`.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(date_of_birth)
}

/// Whole years and months from `today` until `date`; `None` if `date` is past.
pub fn time_until(today: NaiveDate, date: NaiveDate) -> Option<(u32, u32)> {
    let mut months = (date.year() - today.year()) * 12 + date.month() as i32 - today.month() as i32;
    if date.day() < today.day() {
        months -= 1;
    }
    let months = u32::try_from(months).ok()?;
    Some((months.div_euclid(12), months.rem_euclid(12)))
}

/// Render years and months as text, dropping zero parts: `"2 years 1 month"`.
pub fn years_months_text(years: u32, months: u32) -> String {
    let mut parts = Vec::new();
    if years > 0 {
        parts.push(count_with_unit(i64::from(years), "year"));
    }
    if months > 0 || years == 0 {
        parts.push(count_with_unit(i64::from(months), "month"));
    }
    parts.join(" ")
}

/// Convert an ISO 8601 date duration to text.
///
/// Only the date part (`Y`, `M`, `W`, `D`) is read; a time part after `T` is
/// ignored. Zero components are dropped. Returns `None` for malformed input.
///
/// ```
/// use mdp_content::dates::iso_duration_to_text;
///
/// assert_eq!(iso_duration_to_text("P65Y3M").as_deref(), Some("65 years 3 months"));
/// assert_eq!(iso_duration_to_text("P1Y0M1D").as_deref(), Some("1 year 1 day"));
/// assert_eq!(iso_duration_to_text("65 years"), None);
/// ```
pub fn iso_duration_to_text(value: &str) -> Option<String> {
    let body = value.trim().strip_prefix('P')?;
    let date_part = body.split('T').next().unwrap_or_default();

    let mut parts = Vec::new();
    let mut digits = String::new();
    for c in date_part.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let n: i64 = digits.parse().ok()?;
        digits.clear();
        let unit = match c {
            'Y' => "year",
            'M' => "month",
            'W' => "week",
            'D' => "day",
            _ => return None,
        };
        if n != 0 {
            parts.push(count_with_unit(n, unit));
        }
    }
    if !digits.is_empty() {
        return None;
    }
    if parts.is_empty() {
        return Some(count_with_unit(0, "day"));
    }
    Some(parts.join(" "))
}
