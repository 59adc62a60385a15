//! Prompt filters.
//!
//! Each filter is bound to its context first and then applied to a prompt
//! list, so the query engine can compose them in sequence. Both keep the
//! input order.

use chrono::{DateTime, Utc};

use crate::entities::{Answer, Prompt};
use crate::time::to_start_of_day;

/// Drop every prompt that has an answer with the same question and instant.
///
/// Matching is exact: an answer one millisecond off does not count.
pub fn keep_unless_prompt_answered(answers: &[Answer]) -> impl Fn(Vec<Prompt>) -> Vec<Prompt> + '_ {
    move |prompts| {
        prompts
            .into_iter()
            .filter(|prompt| {
                !answers
                    .iter()
                    .any(|answer| answer.answers(&prompt.question_id, prompt.timestamp))
            })
            .collect()
    }
}

/// Drop prompts that fall on the same calendar day as `query_instant`.
///
/// The day still in progress is never due. Prompts and query instant must be
/// expressed in the same frame.
pub fn filter_if_current_day(query_instant: DateTime<Utc>) -> impl Fn(Vec<Prompt>) -> Vec<Prompt> {
    let today = to_start_of_day(query_instant);
    move |prompts| {
        prompts
            .into_iter()
            .filter(|prompt| to_start_of_day(prompt.timestamp) != today)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::time::tests::at;

    fn prompt(question_id: &str, timestamp: &str) -> Prompt {
        Prompt {
            question_id: question_id.into(),
            question: "Did you study 2 hours today?".into(),
            timestamp: at(timestamp),
        }
    }

    fn answer(question_id: &str, timestamp: &str) -> Answer {
        Answer {
            id: "1".into(),
            question_id: question_id.into(),
            timestamp: at(timestamp),
            response: true,
        }
    }

    #[test]
    fn answer_at_different_time_keeps_prompt() {
        let prompts = vec![prompt("1", "2022-10-19T15:00:00.000Z")];
        let answers = [answer("1", "2022-10-19T10:00:00.000Z")];

        let kept = keep_unless_prompt_answered(&answers)(prompts.clone());

        assert_eq!(kept, prompts);
    }

    #[test]
    fn answer_at_same_time_filters_prompt() {
        let answers = [answer("1", "2022-10-19T15:00:00.000Z")];

        let kept =
            keep_unless_prompt_answered(&answers)(vec![prompt("1", "2022-10-19T15:00:00.000Z")]);

        assert!(kept.is_empty());
    }

    #[test]
    fn answer_one_millisecond_off_keeps_prompt() {
        let prompts = vec![prompt("1", "2022-10-19T15:00:00.000Z")];
        let answers = [answer("1", "2022-10-19T15:00:00.001Z")];

        assert_eq!(keep_unless_prompt_answered(&answers)(prompts.clone()), prompts);
    }

    #[test]
    fn answer_for_other_question_keeps_prompt() {
        let prompts = vec![prompt("1", "2022-10-19T15:00:00.000Z")];
        let answers = [answer("2", "2022-10-19T15:00:00.000Z")];

        assert_eq!(keep_unless_prompt_answered(&answers)(prompts.clone()), prompts);
    }

    #[test]
    fn answered_filter_keeps_order_of_survivors() {
        let prompts = vec![
            prompt("1", "2022-10-19T05:00:00.000Z"),
            prompt("1", "2022-10-20T05:00:00.000Z"),
            prompt("1", "2022-10-21T05:00:00.000Z"),
        ];
        let answers = [answer("1", "2022-10-20T05:00:00.000Z")];

        let kept = keep_unless_prompt_answered(&answers)(prompts.clone());

        assert_eq!(kept, vec![prompts[0].clone(), prompts[2].clone()]);
    }

    #[test]
    fn earlier_days_survive_current_day_filter() {
        let prompts = vec![
            prompt("1", "2022-10-19T05:00:00.000Z"),
            prompt("1", "2022-10-20T05:00:00.000Z"),
        ];

        let kept = filter_if_current_day(at("2022-10-21T00:00:00.000Z"))(prompts.clone());

        assert_eq!(kept, prompts);
    }

    #[test]
    fn prompt_on_query_day_is_removed() {
        let prompts = vec![
            prompt("1", "2022-10-20T05:00:00.000Z"),
            prompt("1", "2022-10-21T05:00:00.000Z"),
        ];

        let kept = filter_if_current_day(at("2022-10-21T23:59:59.999Z"))(prompts.clone());

        assert_eq!(kept, vec![prompts[0].clone()]);
    }
}
