//! Prompt queue wired to libSQL repositories.

use std::sync::Arc;

use nudge_core::queue::PromptQueue;

use crate::NudgeDb;
use crate::error::DatabaseError;
use crate::repos::{LibsqlAnswerRepository, LibsqlQuestionRepository};

/// A `PromptQueue` persisting to one libSQL database.
pub type LibsqlPromptQueue = PromptQueue<LibsqlQuestionRepository, LibsqlAnswerRepository>;

/// Build a queue whose repositories share `db`.
#[must_use]
pub fn prompt_queue(db: Arc<NudgeDb>) -> LibsqlPromptQueue {
    PromptQueue::new(
        LibsqlQuestionRepository::new(Arc::clone(&db)),
        LibsqlAnswerRepository::new(db),
    )
}

/// Open (or create) the database at `db_path` and build a queue over it.
///
/// # Arguments
///
/// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
///
/// # Errors
///
/// Returns `DatabaseError` if the database cannot be opened or migrated.
pub async fn open_prompt_queue(db_path: &str) -> Result<LibsqlPromptQueue, DatabaseError> {
    let db = NudgeDb::open_local(db_path).await?;
    Ok(prompt_queue(Arc::new(db)))
}
