//! Time utilities: parsing HH:MM, formatting minutes and totals.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Validate an optional user-supplied field value: empty is allowed (the
/// field simply stays blank), anything else must parse as HH:MM.
pub fn validate_field_value(value: &str) -> AppResult<()> {
    if value.is_empty() || parse_time(value).is_some() {
        Ok(())
    } else {
        Err(AppError::InvalidTime(value.to_string()))
    }
}

/// Machine-readable total: always 3 decimals ("8.500").
pub fn format_total(hours: f64) -> String {
    format!("{:.3}", hours)
}

/// Human-readable total: trailing zeros trimmed ("8.5", "8", "7.917").
pub fn format_total_short(hours: f64) -> String {
    let s = format!("{:.3}", hours);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
