//! Recurring question repository.
//!
//! A question is one row in `recurring_questions` plus one row per phase in
//! `question_phases`, written in a single transaction.

use std::sync::Arc;

use async_trait::async_trait;
use nudge_core::entities::{Phase, RecurringQuestion};
use nudge_core::errors::RepositoryError;
use nudge_core::repository::QuestionRepository;

use crate::NudgeDb;
use crate::error::{DatabaseError, is_unique_violation};
use crate::helpers::{format_datetime, get_offset_minutes, parse_datetime};

pub struct LibsqlQuestionRepository {
    db: Arc<NudgeDb>,
}

impl LibsqlQuestionRepository {
    #[must_use]
    pub const fn new(db: Arc<NudgeDb>) -> Self {
        Self { db }
    }

    async fn insert(&self, question: &RecurringQuestion) -> Result<(), libsql::Error> {
        let tx = self.db.conn().transaction().await?;
        tx.execute(
            "INSERT INTO recurring_questions (id, question) VALUES (?1, ?2)",
            libsql::params![question.id.as_str(), question.question.as_str()],
        )
        .await?;

        for (position, phase) in (0_i64..).zip(&question.phases) {
            tx.execute(
                "INSERT INTO question_phases (question_id, position, effective_at, utc_offset_minutes)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    question.id.as_str(),
                    position,
                    format_datetime(phase.timestamp),
                    i64::from(phase.utc_offset_minutes)
                ],
            )
            .await?;
        }

        tx.commit().await
    }

    /// Load every question with its phases, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be parsed.
    pub async fn list(&self) -> Result<Vec<RecurringQuestion>, DatabaseError> {
        let mut rows = self
            .db
            .conn()
            .query(
                "SELECT q.id, q.question, p.effective_at, p.utc_offset_minutes
                 FROM recurring_questions q
                 JOIN question_phases p ON p.question_id = q.id
                 ORDER BY q.rowid, p.position",
                (),
            )
            .await?;

        let mut questions: Vec<RecurringQuestion> = Vec::new();
        while let Some(row) = rows.next().await? {
            let id = row.get::<String>(0)?;
            let phase = Phase {
                timestamp: parse_datetime(&row.get::<String>(2)?)?,
                utc_offset_minutes: get_offset_minutes(&row, 3)?,
            };

            match questions.last_mut() {
                Some(current) if current.id == id => current.phases.push(phase),
                _ => questions.push(RecurringQuestion {
                    id,
                    question: row.get::<String>(1)?,
                    phases: vec![phase],
                }),
            }
        }

        Ok(questions)
    }
}

#[async_trait]
impl QuestionRepository for LibsqlQuestionRepository {
    async fn create(&self, question: &RecurringQuestion) -> Result<(), RepositoryError> {
        match self.insert(question).await {
            Ok(()) => {
                tracing::debug!(question_id = %question.id, "stored recurring question");
                Ok(())
            }
            Err(e) if is_unique_violation(&e) => Err(RepositoryError::Duplicate {
                entity_type: "recurring_question".into(),
                id: question.id.clone(),
            }),
            Err(e) => Err(DatabaseError::from(e).into()),
        }
    }

    async fn find_all(&self) -> Result<Vec<RecurringQuestion>, RepositoryError> {
        Ok(self.list().await?)
    }
}
