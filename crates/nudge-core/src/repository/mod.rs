//! Storage contracts consumed by the prompt queue.
//!
//! A host supplies concrete repositories (see `nudge-db` for libSQL, or
//! [`memory`] for process-local storage). Both traits are object safe, so a
//! queue can be built over `Arc<dyn QuestionRepository>` as well as concrete
//! types.

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::{Answer, RecurringQuestion};
use crate::errors::RepositoryError;

/// Persistence for recurring questions.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Store a new question. Fails with `RepositoryError::Duplicate` if the id exists.
    async fn create(&self, question: &RecurringQuestion) -> Result<(), RepositoryError>;

    /// Every stored question, in insertion order.
    async fn find_all(&self) -> Result<Vec<RecurringQuestion>, RepositoryError>;
}

/// Persistence for answers.
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Store a new answer. Fails with `RepositoryError::Duplicate` if the id exists.
    async fn create(&self, answer: &Answer) -> Result<(), RepositoryError>;

    /// Every stored answer, in insertion order.
    async fn find_all(&self) -> Result<Vec<Answer>, RepositoryError>;
}

#[async_trait]
impl<T: QuestionRepository + ?Sized> QuestionRepository for Arc<T> {
    async fn create(&self, question: &RecurringQuestion) -> Result<(), RepositoryError> {
        (**self).create(question).await
    }

    async fn find_all(&self) -> Result<Vec<RecurringQuestion>, RepositoryError> {
        (**self).find_all().await
    }
}

#[async_trait]
impl<T: AnswerRepository + ?Sized> AnswerRepository for Arc<T> {
    async fn create(&self, answer: &Answer) -> Result<(), RepositoryError> {
        (**self).create(answer).await
    }

    async fn find_all(&self) -> Result<Vec<Answer>, RepositoryError> {
        (**self).find_all().await
    }
}
