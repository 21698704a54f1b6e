mod quiz_vm;
mod result_vm;

pub use quiz_vm::{QuestionVm, QuizIntent, QuizScreenVm, QuizVm};
pub use result_vm::{RESULT_TIP, ResultVm};
