use std::fmt;

use crate::model::answer::{Answer, Answers, Choice};
use crate::model::question::QUESTION_COUNT;
use crate::scoring::{QuizResult, classify};

const LAST_INDEX: usize = QUESTION_COUNT - 1;

//
// ─── EVENTS ───────────────────────────────────────────────────────────────────
//

/// Discrete user events forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    /// Record `choice` for the question at `index`; only the current question accepts it.
    SelectOption { index: usize, choice: Choice },
    /// Move to the next question, or complete the session from the last one.
    Advance,
    /// Complete the session. Same effect as `Advance` on the last question.
    Finish,
    GoBack,
    ClearCurrent,
    Restart,
}

/// Why an event was rejected. Rejections never change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// Only `Restart` is accepted once the session is complete.
    Completed,
    NotCurrentQuestion { index: usize, current: usize },
    AtFirstQuestion,
    NotLastQuestion { current: usize },
}

impl fmt::Display for IgnoredReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoredReason::Completed => write!(f, "session already completed"),
            IgnoredReason::NotCurrentQuestion { index, current } => {
                write!(f, "question {index} is not the current question ({current})")
            }
            IgnoredReason::AtFirstQuestion => write!(f, "already at the first question"),
            IgnoredReason::NotLastQuestion { current } => {
                write!(f, "cannot finish from question {current}")
            }
        }
    }
}

/// Outcome of dispatching a [`QuizEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(IgnoredReason),
}

impl Transition {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied)
    }
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress { index: usize },
    Complete,
}

/// State of one user's run through the questionnaire.
///
/// Owns every mutation rule. Events that violate a precondition are rejected
/// silently: the state is left untouched and [`Transition::Ignored`] is returned.
///
/// Advancing does not require the current question to be answered; unanswered
/// slots are scored through [`crate::scoring::DEFAULT_UNANSWERED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    phase: SessionPhase,
    answers: Answers,
    display_name: Option<String>,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::InProgress { index: 0 },
            answers: [Answer::Unanswered; QUESTION_COUNT],
            display_name: None,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Index of the question on screen, or `None` once complete.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            SessionPhase::InProgress { index } => Some(index),
            SessionPhase::Complete => None,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, SessionPhase::Complete)
    }

    #[must_use]
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Answer stored for the question on screen.
    #[must_use]
    pub fn current_answer(&self) -> Option<Answer> {
        self.current_index().map(|index| self.answers[index])
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_answered()).count()
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Replace the display name. Accepted in any phase; the text is not validated.
    pub fn set_display_name(&mut self, name: Option<String>) {
        self.display_name = name;
    }

    /// Progress through the questionnaire in `[0.0, 1.0]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f32 {
        match self.phase {
            SessionPhase::InProgress { index } => index as f32 / QUESTION_COUNT as f32,
            SessionPhase::Complete => 1.0,
        }
    }

    /// Scored result, available only once the session is complete.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.is_complete().then(|| classify(&self.answers))
    }

    /// Apply an event to the session.
    pub fn dispatch(&mut self, event: QuizEvent) -> Transition {
        match (self.phase, event) {
            (_, QuizEvent::Restart) => self.restart(),
            (SessionPhase::Complete, _) => return Transition::Ignored(IgnoredReason::Completed),
            (
                SessionPhase::InProgress { index: current },
                QuizEvent::SelectOption { index, choice },
            ) => {
                if index != current {
                    return Transition::Ignored(IgnoredReason::NotCurrentQuestion {
                        index,
                        current,
                    });
                }
                self.answers[current] = Answer::from(choice);
            }
            (SessionPhase::InProgress { index: current }, QuizEvent::Advance) => {
                self.advance_from(current);
            }
            (SessionPhase::InProgress { index: current }, QuizEvent::Finish) => {
                if current != LAST_INDEX {
                    return Transition::Ignored(IgnoredReason::NotLastQuestion { current });
                }
                self.phase = SessionPhase::Complete;
            }
            (SessionPhase::InProgress { index: current }, QuizEvent::GoBack) => {
                if current == 0 {
                    return Transition::Ignored(IgnoredReason::AtFirstQuestion);
                }
                self.phase = SessionPhase::InProgress { index: current - 1 };
            }
            (SessionPhase::InProgress { index: current }, QuizEvent::ClearCurrent) => {
                self.answers[current] = Answer::Unanswered;
            }
        }

        Transition::Applied
    }

    fn advance_from(&mut self, current: usize) {
        self.phase = if current >= LAST_INDEX {
            SessionPhase::Complete
        } else {
            SessionPhase::InProgress { index: current + 1 }
        };
    }

    fn restart(&mut self) {
        self.phase = SessionPhase::InProgress { index: 0 };
        self.answers = [Answer::Unanswered; QUESTION_COUNT];
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
