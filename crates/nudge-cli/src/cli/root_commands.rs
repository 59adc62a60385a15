use clap::{Args, Subcommand};

use crate::cli::subcommands::{AnswerCommands, QuestionCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Recurring questions.
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Answers to prompts.
    Answer {
        #[command(subcommand)]
        action: AnswerCommands,
    },
    /// List prompts that are due.
    Due(DueArgs),
    /// Print the JSON schema of an entity type.
    Schema(SchemaArgs),
}

/// Arguments for `nudge due`.
#[derive(Clone, Debug, Args)]
pub struct DueArgs {
    /// Query instant (RFC 3339). Defaults to now.
    #[arg(long)]
    pub now: Option<String>,
}

/// Arguments for `nudge schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: question, phase, answer, prompt.
    pub type_name: String,
}
