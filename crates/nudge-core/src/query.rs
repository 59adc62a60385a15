//! The query engine: derives due prompts from schedules and answers.
//!
//! For each phase in effect, days are enumerated in the phase's local frame
//! from the start of its creation day. One prompt is emitted per day at local
//! midnight converted back to UTC. The day still in progress is dropped, and
//! so is every prompt that already has an answer.
//!
//! Phases hand over on calendar dates. A phase owns the local dates from its
//! own start date up to, not including, the earliest start date of any later
//! phase in effect. The date on which a new phase starts belongs to the new
//! phase, so every date is prompted at most once and no date is skipped.
//!
//! "Today" is the local date of the active phase. It is compared against each
//! prompt's local date before the shift back to UTC; comparing a UTC prompt
//! with a local date picks the wrong day for offsets ahead of UTC.

use chrono::{DateTime, Utc};

use crate::days::to_day_list;
use crate::entities::{Answer, Phase, Prompt, RecurringQuestion};
use crate::filters::{filter_if_current_day, keep_unless_prompt_answered};
use crate::time::{to_local_time, to_start_of_day, to_utc_time};

/// Due prompts for every question, given a query instant in local time.
///
/// `query_time_local` is read in the frame of each question's active phase:
/// the latest phase whose own local start is at or before it. Results keep
/// question input order, chronological within a question.
#[must_use]
pub fn calculate_query(
    questions: &[RecurringQuestion],
    answers: &[Answer],
    query_time_local: DateTime<Utc>,
) -> Vec<Prompt> {
    questions
        .iter()
        .flat_map(|question| {
            let active = question
                .phases
                .iter()
                .rev()
                .find(|phase| phase.local_start() <= query_time_local);
            match active {
                Some(phase) => {
                    let now_utc = to_utc_time(query_time_local, phase.utc_offset_minutes);
                    question_prompts_at(question, answers, now_utc)
                }
                None => Vec::new(),
            }
        })
        .collect()
}

/// Due prompts for one question at the UTC instant `now_utc`.
///
/// Empty when the question has no phase in effect yet.
#[must_use]
pub fn question_prompts_at(
    question: &RecurringQuestion,
    answers: &[Answer],
    now_utc: DateTime<Utc>,
) -> Vec<Prompt> {
    let Some((active, active_phase)) = question.active_phase_at(now_utc) else {
        return Vec::new();
    };
    let today = to_local_time(now_utc, active_phase.utc_offset_minutes);

    // Walk backwards so each phase sees the earliest start date after it.
    let mut handover: Option<DateTime<Utc>> = None;
    let mut by_phase = Vec::with_capacity(active + 1);
    for phase in question.phases[..=active].iter().rev() {
        by_phase.push(phase_prompts(question, phase, handover, today));
        let first_day = to_start_of_day(phase.local_start());
        handover = Some(handover.map_or(first_day, |later| later.min(first_day)));
    }

    let candidates = by_phase.into_iter().rev().flatten().collect();
    keep_unless_prompt_answered(answers)(candidates)
}

/// Prompts produced by a single phase, before answer filtering.
///
/// `handover` is the local midnight at which a later phase takes over, or
/// `None` for the active phase. `today` is the active phase's local query
/// instant.
fn phase_prompts(
    question: &RecurringQuestion,
    phase: &Phase,
    handover: Option<DateTime<Utc>>,
    today: DateTime<Utc>,
) -> Vec<Prompt> {
    let offset = phase.utc_offset_minutes;
    let first_day = to_start_of_day(phase.local_start());

    let days = match handover {
        Some(handover) => to_day_list(first_day, handover)
            .into_iter()
            .filter(|day| *day < handover)
            .collect(),
        None => to_day_list(first_day, today),
    };

    let local_prompts = days
        .into_iter()
        .map(|day| Prompt {
            question_id: question.id.clone(),
            question: question.question.clone(),
            timestamp: day,
        })
        .collect();

    filter_if_current_day(today)(local_prompts)
        .into_iter()
        .map(|prompt| Prompt {
            timestamp: to_utc_time(prompt.timestamp, offset),
            ..prompt
        })
        .collect()
}
