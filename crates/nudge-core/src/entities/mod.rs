//! Entity structs for all nudge domain objects.
//!
//! Recurring questions and answers are persisted by a repository; prompts are
//! derived on every query and never stored. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema`.

mod answer;
mod prompt;
mod question;

pub use answer::Answer;
pub use prompt::Prompt;
pub use question::{Phase, RecurringQuestion};
