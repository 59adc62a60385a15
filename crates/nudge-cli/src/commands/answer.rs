use chrono::{DateTime, Utc};
use nudge_core::entities::Answer;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnswerCommands;
use crate::commands::shared::parse::parse_timestamp;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nudge answer`.
pub async fn handle(
    action: &AnswerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnswerCommands::Add {
            question_id,
            timestamp,
            id,
            no,
        } => {
            let timestamp = parse_timestamp(timestamp, "timestamp")?;
            let answer = Answer {
                id: id
                    .clone()
                    .unwrap_or_else(|| default_answer_id(question_id, timestamp)),
                question_id: question_id.clone(),
                timestamp,
                response: !no,
            };
            ctx.queue.create_answer(&answer).await?;
            output(&answer, flags.format)
        }
        AnswerCommands::List => {
            let answers = ctx.queue.get_answers().await?;
            output(&answers, flags.format)
        }
    }
}

/// One prompt takes one answer, so question and instant identify it.
fn default_answer_id(question_id: &str, timestamp: DateTime<Utc>) -> String {
    format!("ans-{question_id}-{}", timestamp.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_id_combines_question_and_millis() {
        let ts = parse_timestamp("2022-10-19T05:00:00Z", "timestamp").unwrap();
        assert_eq!(default_answer_id("study", ts), "ans-study-1666155600000");
    }
}
