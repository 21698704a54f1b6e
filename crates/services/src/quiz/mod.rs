mod progress;
mod service;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use progress::QuizProgress;
pub use service::QuizService;
pub use view::{QuestionScreen, QuizScreen, ResultScreen};
pub use workflow::{ExportReceipt, ExportService, ResultExport};
