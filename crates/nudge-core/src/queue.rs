//! Prompt queue service.
//!
//! `PromptQueue` ties the query engine to injected question and answer
//! repositories. It holds no state of its own: every query reloads both
//! repositories and derives the due prompts from scratch.

use chrono::{DateTime, Utc};

use crate::entities::{Answer, Prompt, RecurringQuestion};
use crate::errors::QueueError;
use crate::query::question_prompts_at;
use crate::repository::{AnswerRepository, QuestionRepository};
use crate::validation::validate_question;

/// Creates questions and answers and reports which prompts are due.
pub struct PromptQueue<Q, A> {
    questions: Q,
    answers: A,
}

impl<Q, A> PromptQueue<Q, A>
where
    Q: QuestionRepository,
    A: AnswerRepository,
{
    /// Build a queue over the given repositories.
    #[must_use]
    pub const fn new(questions: Q, answers: A) -> Self {
        Self { questions, answers }
    }

    /// Validate and store a new recurring question.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::InvariantViolation` if the question is malformed,
    /// or `QueueError::Repository` if the repository rejects it.
    pub async fn create_recurring_question(
        &self,
        question: &RecurringQuestion,
    ) -> Result<(), QueueError> {
        if let Err(error) = validate_question(question) {
            tracing::warn!(question_id = %question.id, %error, "rejected recurring question");
            return Err(error);
        }
        self.questions.create(question).await?;
        tracing::debug!(
            question_id = %question.id,
            phases = question.phases.len(),
            "created recurring question"
        );
        Ok(())
    }

    /// Store a new answer.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::Repository` if the repository rejects it.
    pub async fn create_answer(&self, answer: &Answer) -> Result<(), QueueError> {
        self.answers.create(answer).await?;
        tracing::debug!(
            answer_id = %answer.id,
            question_id = %answer.question_id,
            timestamp = %answer.timestamp,
            "created answer"
        );
        Ok(())
    }

    /// Every stored answer, in repository order.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::Repository` if the read fails.
    pub async fn get_answers(&self) -> Result<Vec<Answer>, QueueError> {
        Ok(self.answers.find_all().await?)
    }

    /// Every stored recurring question, in repository order.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::Repository` if the read fails.
    pub async fn get_recurring_questions(&self) -> Result<Vec<RecurringQuestion>, QueueError> {
        Ok(self.questions.find_all().await?)
    }

    /// Prompts due at `now_utc` across all questions.
    ///
    /// Each question is evaluated in the local frame of its own phases; the
    /// answers are read once and shared by every question.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::Repository` if either repository read fails.
    pub async fn query(&self, now_utc: DateTime<Utc>) -> Result<Vec<Prompt>, QueueError> {
        let questions = self.questions.find_all().await?;
        let answers = self.answers.find_all().await?;

        let prompts: Vec<Prompt> = questions
            .iter()
            .flat_map(|question| question_prompts_at(question, &answers, now_utc))
            .collect();

        tracing::debug!(
            %now_utc,
            questions = questions.len(),
            answers = answers.len(),
            prompts = prompts.len(),
            "computed due prompts"
        );
        Ok(prompts)
    }
}
