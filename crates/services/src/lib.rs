#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::ExportError;
pub use quiz::{
    ExportReceipt, ExportService, QuestionScreen, QuizProgress, QuizScreen, QuizService,
    ResultExport, ResultScreen,
};
