//! Total-duration calculation over a sequence of time pairs.
//!
//! Pure and deterministic: invalid pairs contribute nothing, an end time
//! earlier than its start is interpreted as crossing midnight.

use crate::models::TimePair;
use crate::utils::time::parse_time;
use chrono::Timelike;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// True when the value parses as a 24-hour "HH:MM" time.
pub fn is_valid_time(value: &str) -> bool {
    parse_time(value).is_some()
}

/// Elapsed minutes of a single pair, or None when either field is invalid.
/// A negative raw difference wraps by one day (23:30 → 00:15 is 45 minutes).
pub fn pair_minutes(pair: &TimePair) -> Option<i64> {
    let start = parse_time(&pair.start)?;
    let end = parse_time(&pair.end)?;

    let start_min = (start.hour() * 60 + start.minute()) as i64;
    let end_min = (end.hour() * 60 + end.minute()) as i64;

    let mut duration = end_min - start_min;
    if duration < 0 {
        duration += MINUTES_PER_DAY;
    }
    Some(duration)
}

/// Sum of all valid pairs, in minutes. Invalid pairs are skipped silently.
pub fn total_minutes(pairs: &[TimePair]) -> i64 {
    pairs.iter().filter_map(pair_minutes).sum()
}

/// Total duration in hours, rounded to 3 decimal places.
/// An empty or all-invalid sequence yields 0.
pub fn total_hours(pairs: &[TimePair]) -> f64 {
    let total = total_minutes(pairs);
    let hours = (total / 60) as f64 + (total % 60) as f64 / 60.0;
    (hours * 1000.0).round() / 1000.0
}
