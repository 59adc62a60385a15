//! Process-local repositories backed by a `Vec`.
//!
//! Used by tests and by hosts that do not need durable storage.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AnswerRepository, QuestionRepository};
use crate::entities::{Answer, RecurringQuestion};
use crate::errors::RepositoryError;

#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    questions: RwLock<Vec<RecurringQuestion>>,
}

impl InMemoryQuestionRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: &RecurringQuestion) -> Result<(), RepositoryError> {
        let mut questions = self.questions.write().await;
        if questions.iter().any(|existing| existing.id == question.id) {
            return Err(RepositoryError::Duplicate {
                entity_type: "recurring_question".into(),
                id: question.id.clone(),
            });
        }
        questions.push(question.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<RecurringQuestion>, RepositoryError> {
        Ok(self.questions.read().await.clone())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryAnswerRepository {
    answers: RwLock<Vec<Answer>>,
}

impl InMemoryAnswerRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnswerRepository for InMemoryAnswerRepository {
    async fn create(&self, answer: &Answer) -> Result<(), RepositoryError> {
        let mut answers = self.answers.write().await;
        if answers.iter().any(|existing| existing.id == answer.id) {
            return Err(RepositoryError::Duplicate {
                entity_type: "answer".into(),
                id: answer.id.clone(),
            });
        }
        answers.push(answer.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Answer>, RepositoryError> {
        Ok(self.answers.read().await.clone())
    }
}
