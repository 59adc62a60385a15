mod answer;
mod question;

pub use answer::AnswerCommands;
pub use question::QuestionCommands;
