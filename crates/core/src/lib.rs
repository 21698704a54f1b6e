#![forbid(unsafe_code)]

pub mod export;
pub mod model;
pub mod scoring;
pub mod time;

pub use export::{ExportRecord, ShareSummary};
pub use model::{
    Answer, Answers, Choice, IgnoredReason, Question, QuestionError, Questionnaire, QuizEvent,
    QuizSession, SessionPhase, Transition, QUESTION_COUNT,
};
pub use scoring::{ProfileLabel, QuizResult, classify};
pub use time::Clock;
