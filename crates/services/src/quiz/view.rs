use quiz_core::export::ShareSummary;
use quiz_core::{Choice, Question, QuizResult};

/// Presentation-agnostic snapshot of the question on screen.
///
/// Holds plain text and flags only; styling and layout belong to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionScreen {
    pub index: usize,
    /// 1-based position for display.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub option_creative: String,
    pub option_analytical: String,
    /// Pre-selected option, if the slot was answered before.
    pub selected: Option<Choice>,
    pub can_go_back: bool,
    /// The primary action on this screen completes the quiz.
    pub is_last: bool,
}

impl QuestionScreen {
    #[must_use]
    pub fn from_question(
        index: usize,
        total: usize,
        question: &Question,
        selected: Option<Choice>,
    ) -> Self {
        Self {
            index,
            number: index + 1,
            total,
            prompt: question.prompt().to_owned(),
            option_creative: question.option_creative().to_owned(),
            option_analytical: question.option_analytical().to_owned(),
            selected,
            can_go_back: index > 0,
            is_last: index + 1 == total,
        }
    }
}

/// Snapshot of the result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultScreen {
    pub result: QuizResult,
    pub summary: ShareSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizScreen {
    Question(QuestionScreen),
    Result(ResultScreen),
}
