use clap::Subcommand;

/// Answer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnswerCommands {
    /// Record an answer for one prompt.
    Add {
        /// Question being answered.
        #[arg(long)]
        question_id: String,
        /// Prompt timestamp being answered (RFC 3339).
        #[arg(long)]
        timestamp: String,
        /// Answer id. Derived from question and timestamp when omitted.
        #[arg(long)]
        id: Option<String>,
        /// Record a negative response.
        #[arg(long)]
        no: bool,
    },
    /// List all answers.
    List,
}
