use anyhow::bail;
use nudge_core::entities::{Answer, Phase, Prompt, RecurringQuestion};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `nudge schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.as_str() {
        "question" | "recurring_question" => schema_for!(RecurringQuestion),
        "phase" => schema_for!(Phase),
        "answer" => schema_for!(Answer),
        "prompt" => schema_for!(Prompt),
        other => bail!("unknown schema type '{other}' (expected question, phase, answer, prompt)"),
    };
    output(&schema, flags.format)
}
