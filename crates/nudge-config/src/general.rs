//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Offsets of a full day or more are not valid UTC offsets.
const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Offset used by `nudge question add` when `--offset-minutes` is omitted.
    ///
    /// Same convention as a phase: local = UTC - offset, so `300` is UTC-5.
    #[serde(default)]
    pub default_utc_offset_minutes: i32,
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.default_utc_offset_minutes.unsigned_abs() >= MAX_UTC_OFFSET_MINUTES.unsigned_abs()
        {
            return Err(ConfigError::InvalidValue {
                field: "general.default_utc_offset_minutes".into(),
                reason: format!(
                    "{} is not within one day of UTC",
                    self.default_utc_offset_minutes
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_utc_offset_minutes, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn full_day_offset_is_invalid() {
        let config = GeneralConfig {
            default_utc_offset_minutes: -1440,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_utc_offset_minutes"));
    }

    #[test]
    fn most_negative_offset_is_invalid() {
        let config = GeneralConfig {
            default_utc_offset_minutes: i32::MIN,
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "general.default_utc_offset_minutes"
        ));
    }

    #[test]
    fn offset_just_inside_a_day_is_valid() {
        for offset in [-1439, 1439] {
            let config = GeneralConfig {
                default_utc_offset_minutes: offset,
            };
            assert!(config.validate().is_ok(), "{offset} should be valid");
        }
    }
}
