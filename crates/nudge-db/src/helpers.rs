//! Row-to-entity parsing helpers.
//!
//! Instants are stored as RFC 3339 text with nanosecond precision so that an
//! answer read back compares equal to the prompt it was recorded for.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::DatabaseError;

/// Format an instant for storage.
#[must_use]
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a required RFC 3339 TEXT column as `DateTime<Utc>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not RFC 3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read an INTEGER column holding a UTC offset in minutes.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the stored value does not fit `i32`.
pub fn get_offset_minutes(row: &libsql::Row, idx: i32) -> Result<i32, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    i32::try_from(raw)
        .map_err(|_| DatabaseError::InvalidState(format!("UTC offset out of range: {raw}")))
}

/// Read an INTEGER column holding a 0/1 flag.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for any other value.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    match row.get::<i64>(idx)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(DatabaseError::InvalidState(format!(
            "expected boolean 0 or 1, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_instant_round_trips_exactly() {
        let dt = DateTime::parse_from_rfc3339("2022-10-19T05:00:00.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parse_datetime(&format_datetime(dt)).unwrap(), dt);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }
}
