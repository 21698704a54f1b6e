use quiz_core::{Choice, QuizEvent, Transition};
use services::{QuestionScreen, QuizScreen, QuizService};

use crate::vm::result_vm::ResultVm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(Choice),
    Next,
    Finish,
    Back,
    Clear,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub heading: String,
    pub counter: String,
    pub option_a: String,
    pub option_b: String,
    pub selected: Option<Choice>,
    pub can_go_back: bool,
    pub is_last: bool,
    pub progress_percent: usize,
}

impl QuestionVm {
    fn from_screen(screen: &QuestionScreen) -> Self {
        Self {
            index: screen.index,
            heading: format!("{}. {}", screen.number, screen.prompt),
            counter: format!("Question {} of {}", screen.number, screen.total),
            option_a: format!("{}. {}", Choice::Creative.letter(), screen.option_creative),
            option_b: format!("{}. {}", Choice::Analytical.letter(), screen.option_analytical),
            selected: screen.selected,
            can_go_back: screen.can_go_back,
            is_last: screen.is_last,
            progress_percent: screen.index * 100 / screen.total.max(1),
        }
    }

    #[must_use]
    pub fn is_selected(&self, choice: Choice) -> bool {
        self.selected == Some(choice)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Question(QuestionVm),
    Result(ResultVm),
}

/// UI-side owner of the quiz session.
pub struct QuizVm {
    quiz: QuizService,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: QuizService) -> Self {
        Self { quiz }
    }

    #[must_use]
    pub fn service(&self) -> &QuizService {
        &self.quiz
    }

    /// Forward a UI intent to the session.
    pub fn apply(&mut self, intent: QuizIntent) -> Transition {
        let event = match intent {
            QuizIntent::Select(choice) => match self.quiz.session().current_index() {
                Some(index) => QuizEvent::SelectOption { index, choice },
                // Let the session reject it uniformly.
                None => QuizEvent::SelectOption { index: 0, choice },
            },
            QuizIntent::Next => QuizEvent::Advance,
            QuizIntent::Finish => QuizEvent::Finish,
            QuizIntent::Back => QuizEvent::GoBack,
            QuizIntent::Clear => QuizEvent::ClearCurrent,
            QuizIntent::Restart => QuizEvent::Restart,
        };
        self.quiz.dispatch(event)
    }

    /// Store the name typed by the user; an empty field clears it.
    pub fn set_display_name(&mut self, raw: String) {
        let name = if raw.is_empty() { None } else { Some(raw) };
        self.quiz.set_display_name(name);
    }

    #[must_use]
    pub fn display_name_input(&self) -> String {
        self.quiz.display_name().unwrap_or_default().to_string()
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        match self.quiz.screen() {
            QuizScreen::Question(screen) => QuizScreenVm::Question(QuestionVm::from_screen(&screen)),
            QuizScreen::Result(screen) => QuizScreenVm::Result(ResultVm::from_screen(&screen)),
        }
    }
}
