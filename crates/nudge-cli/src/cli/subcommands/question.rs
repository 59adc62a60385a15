use clap::Subcommand;

/// Recurring question commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// Create a recurring question with a single phase.
    Add {
        /// Unique question id.
        #[arg(long)]
        id: String,
        /// Question text shown with each prompt.
        #[arg(long)]
        text: String,
        /// Minutes to subtract from UTC for local time (300 = UTC-5).
        #[arg(long, allow_negative_numbers = true)]
        offset_minutes: Option<i32>,
        /// Instant the schedule starts (RFC 3339). Defaults to now.
        #[arg(long)]
        at: Option<String>,
    },
    /// List recurring questions.
    List,
}
