use chrono::{DateTime, Utc};

/// Parse an RFC 3339 argument into a UTC instant.
pub fn parse_timestamp(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional RFC 3339 argument, falling back to the current time.
pub fn timestamp_or_now(raw: Option<&str>, field: &str) -> anyhow::Result<DateTime<Utc>> {
    raw.map_or_else(|| Ok(Utc::now()), |raw| parse_timestamp(raw, field))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_offset_timestamp_as_utc() {
        let dt = parse_timestamp("2022-10-19T20:00:00-05:00", "at").expect("should parse");
        assert_eq!(dt.to_rfc3339(), "2022-10-20T01:00:00+00:00");
    }

    #[test]
    fn errors_on_invalid_timestamp() {
        let err = parse_timestamp("yesterday", "timestamp").expect_err("should fail");
        assert!(err.to_string().contains("invalid timestamp 'yesterday'"));
    }

    #[test]
    fn missing_timestamp_is_now() {
        let before = Utc::now();
        let dt = timestamp_or_now(None, "now").expect("should default");
        assert!(dt >= before);
    }
}
