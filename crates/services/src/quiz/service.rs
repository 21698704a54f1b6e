use std::fmt;
use std::sync::Arc;

use quiz_core::export::ShareSummary;
use quiz_core::{QUESTION_COUNT, Questionnaire, QuizEvent, QuizResult, QuizSession, Transition};

use super::progress::QuizProgress;
use super::view::{QuestionScreen, QuizScreen, ResultScreen};

//
// ─── QUIZ SERVICE ──────────────────────────────────────────────────────────────
//

/// Presentation-facing facade over a single quiz session.
///
/// Owns the session and a shared handle to the questionnaire. Events are
/// applied synchronously; rejected events leave the session untouched and are
/// only logged.
#[derive(Clone)]
pub struct QuizService {
    questionnaire: Arc<Questionnaire>,
    session: QuizSession,
}

impl QuizService {
    #[must_use]
    pub fn new(questionnaire: Arc<Questionnaire>) -> Self {
        tracing::debug!(questions = questionnaire.len(), "quiz session started");
        Self {
            questionnaire,
            session: QuizSession::new(),
        }
    }

    /// Session over the built-in questionnaire.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Arc::new(Questionnaire::builtin()))
    }

    #[must_use]
    pub fn with_display_name(mut self, name: Option<String>) -> Self {
        self.session.set_display_name(name);
        self
    }

    #[must_use]
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.session.display_name()
    }

    pub fn set_display_name(&mut self, name: Option<String>) {
        self.session.set_display_name(name);
    }

    /// Apply a user event to the session.
    pub fn dispatch(&mut self, event: QuizEvent) -> Transition {
        let was_complete = self.session.is_complete();
        let transition = self.session.dispatch(event);

        match transition {
            Transition::Ignored(reason) => {
                tracing::debug!(?event, %reason, "quiz event ignored");
            }
            Transition::Applied => {
                if !was_complete {
                    if let Some(result) = self.session.result() {
                        tracing::info!(
                            label = %result.label(),
                            creative = result.creative_count(),
                            analytical = result.analytical_count(),
                            answered = self.session.answered_count(),
                            "quiz completed"
                        );
                    }
                } else if matches!(event, QuizEvent::Restart) {
                    tracing::info!("quiz restarted");
                }
            }
        }

        transition
    }

    /// Scored result; `None` until the quiz is complete.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.session.result()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let position = self.session.current_index().unwrap_or(QUESTION_COUNT);
        QuizProgress {
            position,
            total: QUESTION_COUNT,
            answered: self.session.answered_count(),
            fraction: self.session.progress_fraction(),
            is_complete: self.session.is_complete(),
        }
    }

    /// Snapshot of what the presentation layer should show now.
    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        if let Some(result) = self.session.result() {
            return QuizScreen::Result(ResultScreen {
                result,
                summary: ShareSummary::new(self.session.display_name(), &result),
            });
        }

        let index = self.session.current_index().unwrap_or_default();
        let selected = self.session.current_answer().and_then(|a| a.choice());
        // The session keeps `index` in range, so the lookup always succeeds.
        let question = self
            .questionnaire
            .get(index)
            .unwrap_or(&self.questionnaire.questions()[0]);

        QuizScreen::Question(QuestionScreen::from_question(
            index,
            QUESTION_COUNT,
            question,
            selected,
        ))
    }
}

impl Default for QuizService {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("phase", &self.session.phase())
            .field("answered", &self.session.answered_count())
            .field("display_name", &self.session.display_name())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
