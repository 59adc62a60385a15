//! Creation-time checks for recurring questions.

use crate::entities::RecurringQuestion;
use crate::errors::QueueError;

/// Offsets must stay strictly inside one day in either direction.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60;

/// Whether `utc_offset_minutes` is strictly less than one day from UTC.
#[must_use]
pub const fn offset_in_range(utc_offset_minutes: i32) -> bool {
    utc_offset_minutes.unsigned_abs() < MAX_UTC_OFFSET_MINUTES.unsigned_abs()
}

/// Reject questions the query engine cannot schedule.
///
/// # Errors
///
/// Returns `QueueError::InvariantViolation` when the id is blank, there are
/// no phases, phases are not strictly ascending by timestamp, or an offset
/// is a full day or more.
pub fn validate_question(question: &RecurringQuestion) -> Result<(), QueueError> {
    if question.id.trim().is_empty() {
        return Err(QueueError::InvariantViolation(
            "recurring question id must not be empty".into(),
        ));
    }

    if question.phases.is_empty() {
        return Err(QueueError::InvariantViolation(format!(
            "recurring question {} has no phases",
            question.id
        )));
    }

    if let Some(phase) = question
        .phases
        .iter()
        .find(|phase| !offset_in_range(phase.utc_offset_minutes))
    {
        return Err(QueueError::InvariantViolation(format!(
            "recurring question {} has out-of-range UTC offset {} minutes",
            question.id, phase.utc_offset_minutes
        )));
    }

    if question
        .phases
        .windows(2)
        .any(|pair| pair[1].timestamp <= pair[0].timestamp)
    {
        return Err(QueueError::InvariantViolation(format!(
            "recurring question {} phases are not in ascending timestamp order",
            question.id
        )));
    }

    Ok(())
}
