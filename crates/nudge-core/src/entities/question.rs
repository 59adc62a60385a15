use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::time::to_local_time;

/// A question asked once per calendar day, starting from its first phase.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecurringQuestion {
    pub id: String,
    pub question: String,
    /// Schedule phases, strictly ascending by `timestamp`. Never empty.
    pub phases: Vec<Phase>,
}

/// Schedule and timezone in effect from `timestamp` onward.
///
/// Local time is `utc - utc_offset_minutes`, so `300` is five hours behind
/// UTC and `-120` is two hours ahead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Phase {
    pub timestamp: DateTime<Utc>,
    pub utc_offset_minutes: i32,
}

impl Phase {
    /// The phase's effective instant expressed in its own local frame.
    #[must_use]
    pub fn local_start(&self) -> DateTime<Utc> {
        to_local_time(self.timestamp, self.utc_offset_minutes)
    }
}

impl RecurringQuestion {
    /// Latest phase in effect at `now_utc`, with its index.
    ///
    /// Returns `None` when every phase starts after `now_utc`.
    #[must_use]
    pub fn active_phase_at(&self, now_utc: DateTime<Utc>) -> Option<(usize, &Phase)> {
        self.phases
            .iter()
            .enumerate()
            .rev()
            .find(|(_, phase)| phase.timestamp <= now_utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::tests::at;

    fn question(phases: Vec<Phase>) -> RecurringQuestion {
        RecurringQuestion {
            id: "1".into(),
            question: "Did you study 2 hours today?".into(),
            phases,
        }
    }

    #[test]
    fn local_start_subtracts_offset() {
        let phase = Phase {
            timestamp: at("2022-10-20T01:00:00.000Z"),
            utc_offset_minutes: 300,
        };
        assert_eq!(phase.local_start(), at("2022-10-19T20:00:00.000Z"));
    }

    #[test]
    fn active_phase_is_latest_started() {
        let q = question(vec![
            Phase {
                timestamp: at("2022-10-01T00:00:00.000Z"),
                utc_offset_minutes: 300,
            },
            Phase {
                timestamp: at("2022-10-10T00:00:00.000Z"),
                utc_offset_minutes: -120,
            },
        ]);

        let (index, phase) = q.active_phase_at(at("2022-10-12T00:00:00.000Z")).unwrap();
        assert_eq!(index, 1);
        assert_eq!(phase.utc_offset_minutes, -120);

        let (index, _) = q.active_phase_at(at("2022-10-09T23:59:59.999Z")).unwrap();
        assert_eq!(index, 0);

        let (index, _) = q.active_phase_at(at("2022-10-10T00:00:00.000Z")).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn no_active_phase_before_creation() {
        let q = question(vec![Phase {
            timestamp: at("2022-10-01T00:00:00.000Z"),
            utc_offset_minutes: 0,
        }]);
        assert!(q.active_phase_at(at("2022-09-30T00:00:00.000Z")).is_none());
    }
}
