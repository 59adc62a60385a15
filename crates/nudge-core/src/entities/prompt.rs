use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A due notice for one recurring question on one calendar day.
///
/// `timestamp` is local midnight of that day converted back to UTC.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Prompt {
    pub question_id: String,
    pub question: String,
    pub timestamp: DateTime<Utc>,
}
