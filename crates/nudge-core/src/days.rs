//! Day enumeration between two instants.

use chrono::{DateTime, Utc};

use crate::time::add_day;

/// Every 24-hour step from `start` that does not pass `end`.
///
/// Returns `[start, start + 24h, ...]`. `end` itself is included only when it
/// lies a whole number of days after `start`. Empty when `end < start`.
#[must_use]
pub fn to_day_list(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let mut days = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        days.push(cursor);
        cursor = add_day(cursor);
    }
    days
}
