use nudge_core::entities::{Phase, RecurringQuestion};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuestionCommands;
use crate::commands::shared::parse::timestamp_or_now;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nudge question`.
pub async fn handle(
    action: &QuestionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuestionCommands::Add {
            id,
            text,
            offset_minutes,
            at,
        } => {
            let question = RecurringQuestion {
                id: id.clone(),
                question: text.clone(),
                phases: vec![Phase {
                    timestamp: timestamp_or_now(at.as_deref(), "at")?,
                    utc_offset_minutes: offset_minutes
                        .unwrap_or(ctx.config.general.default_utc_offset_minutes),
                }],
            };
            ctx.queue.create_recurring_question(&question).await?;
            output(&question, flags.format)
        }
        QuestionCommands::List => {
            let questions = ctx.queue.get_recurring_questions().await?;
            output(&questions, flags.format)
        }
    }
}
