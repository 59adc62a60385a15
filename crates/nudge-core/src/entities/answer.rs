use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A recorded response to one prompt of a recurring question.
///
/// `timestamp` is the UTC instant of the prompt being answered, so an answer
/// suppresses exactly the prompt sharing its `question_id` and instant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Answer {
    pub id: String,
    pub question_id: String,
    pub timestamp: DateTime<Utc>,
    pub response: bool,
}

impl Answer {
    /// Whether this answer covers the prompt for `question_id` at `timestamp`.
    #[must_use]
    pub fn answers(&self, question_id: &str, timestamp: DateTime<Utc>) -> bool {
        self.question_id == question_id && self.timestamp == timestamp
    }
}
