//! Answer repository.

use std::sync::Arc;

use async_trait::async_trait;
use nudge_core::entities::Answer;
use nudge_core::errors::RepositoryError;
use nudge_core::repository::AnswerRepository;

use crate::NudgeDb;
use crate::error::{DatabaseError, is_unique_violation};
use crate::helpers::{format_datetime, get_bool, parse_datetime};

pub struct LibsqlAnswerRepository {
    db: Arc<NudgeDb>,
}

impl LibsqlAnswerRepository {
    #[must_use]
    pub const fn new(db: Arc<NudgeDb>) -> Self {
        Self { db }
    }

    /// Load every answer in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be parsed.
    pub async fn list(&self) -> Result<Vec<Answer>, DatabaseError> {
        let mut rows = self
            .db
            .conn()
            .query(
                "SELECT id, question_id, timestamp, response FROM answers ORDER BY rowid",
                (),
            )
            .await?;

        let mut answers = Vec::new();
        while let Some(row) = rows.next().await? {
            answers.push(row_to_answer(&row)?);
        }
        Ok(answers)
    }
}

#[async_trait]
impl AnswerRepository for LibsqlAnswerRepository {
    async fn create(&self, answer: &Answer) -> Result<(), RepositoryError> {
        let result = self
            .db
            .conn()
            .execute(
                "INSERT INTO answers (id, question_id, timestamp, response) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    answer.id.as_str(),
                    answer.question_id.as_str(),
                    format_datetime(answer.timestamp),
                    i64::from(answer.response)
                ],
            )
            .await;

        match result {
            Ok(_) => {
                tracing::debug!(answer_id = %answer.id, "stored answer");
                Ok(())
            }
            Err(e) if is_unique_violation(&e) => Err(RepositoryError::Duplicate {
                entity_type: "answer".into(),
                id: answer.id.clone(),
            }),
            Err(e) => Err(DatabaseError::from(e).into()),
        }
    }

    async fn find_all(&self) -> Result<Vec<Answer>, RepositoryError> {
        Ok(self.list().await?)
    }
}

/// Convert a libSQL row to an `Answer` struct.
fn row_to_answer(row: &libsql::Row) -> Result<Answer, DatabaseError> {
    Ok(Answer {
        id: row.get::<String>(0)?,
        question_id: row.get::<String>(1)?,
        timestamp: parse_datetime(&row.get::<String>(2)?)?,
        response: get_bool(row, 3)?,
    })
}
