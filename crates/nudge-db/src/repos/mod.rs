//! Repository implementations, one per persisted entity.

pub mod answer;
pub mod question;

pub use answer::LibsqlAnswerRepository;
pub use question::LibsqlQuestionRepository;
