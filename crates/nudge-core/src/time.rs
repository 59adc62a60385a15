//! Shifting instants between UTC and a phase's local frame.
//!
//! Local instants are still carried as `DateTime<Utc>`: they are UTC values
//! moved by the phase offset, used only to find calendar-day boundaries.

use chrono::{DateTime, NaiveTime, TimeDelta, Utc};

/// Convert a UTC instant into the local frame of `utc_offset_minutes`.
///
/// Computes `timestamp - utc_offset_minutes`.
#[must_use]
pub fn to_local_time(timestamp: DateTime<Utc>, utc_offset_minutes: i32) -> DateTime<Utc> {
    timestamp - TimeDelta::minutes(i64::from(utc_offset_minutes))
}

/// Convert a local instant back to UTC. Inverse of [`to_local_time`].
#[must_use]
pub fn to_utc_time(local: DateTime<Utc>, utc_offset_minutes: i32) -> DateTime<Utc> {
    local + TimeDelta::minutes(i64::from(utc_offset_minutes))
}

/// Midnight of the same calendar day. No timezone shift is applied.
#[must_use]
pub fn to_start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Exactly 24 hours later. No DST adjustment.
#[must_use]
pub fn add_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant + TimeDelta::hours(24)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Parse an RFC 3339 literal for test fixtures.
    pub(crate) fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn local_time_behind_utc() {
        // EST: five hours behind, 1AM UTC is 8PM the previous day
        assert_eq!(
            to_local_time(at("2022-10-20T01:00:00.000Z"), 5 * 60),
            at("2022-10-19T20:00:00.000Z")
        );
    }

    #[test]
    fn local_time_ahead_of_utc() {
        // Bucharest: two hours ahead, 8PM UTC is 10PM the same day
        assert_eq!(
            to_local_time(at("2022-10-20T20:00:00.000Z"), -2 * 60),
            at("2022-10-20T22:00:00.000Z")
        );
    }

    #[test]
    fn utc_time_round_trips() {
        let t = at("2022-10-20T01:23:45.678Z");
        for offset in [-840, -120, -1, 0, 1, 300, 720] {
            assert_eq!(to_utc_time(to_local_time(t, offset), offset), t);
        }
    }

    #[test]
    fn start_of_day_truncates_time() {
        assert_eq!(
            to_start_of_day(at("2022-10-19T20:01:01.500Z")),
            at("2022-10-19T00:00:00.000Z")
        );
    }

    #[test]
    fn start_of_day_keeps_midnight() {
        let midnight = at("2022-10-19T00:00:00.000Z");
        assert_eq!(to_start_of_day(midnight), midnight);
    }

    #[test]
    fn add_day_is_fixed_24_hours() {
        assert_eq!(
            add_day(at("2022-10-19T05:00:00.000Z")),
            at("2022-10-20T05:00:00.000Z")
        );
        // No DST awareness: US clocks fell back on 2022-11-06
        assert_eq!(
            add_day(at("2022-11-05T04:00:00.000Z")),
            at("2022-11-06T04:00:00.000Z")
        );
    }
}
