mod answer;
mod question;
mod session;

pub use answer::{Answer, Answers, Choice};
pub use question::{QUESTION_COUNT, Question, QuestionError, Questionnaire};
pub use session::{IgnoredReason, QuizEvent, QuizSession, SessionPhase, Transition};
