use thiserror::Error;

use crate::model::answer::Choice;

/// Number of questions in every questionnaire.
pub const QUESTION_COUNT: usize = 10;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {field} cannot be blank")]
    Blank { field: &'static str },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single A/B question: a short topic prompt and one option per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    option_creative: String,
    option_analytical: String,
}

impl Question {
    /// Build a question from caller-supplied text.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::Blank` if any text is empty after trimming.
    pub fn new(
        prompt: impl Into<String>,
        option_creative: impl Into<String>,
        option_analytical: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = non_blank(prompt.into(), "prompt")?;
        let option_creative = non_blank(option_creative.into(), "creative option")?;
        let option_analytical = non_blank(option_analytical.into(), "analytical option")?;

        Ok(Self {
            prompt,
            option_creative,
            option_analytical,
        })
    }

    fn from_static(prompt: &str, option_creative: &str, option_analytical: &str) -> Self {
        Self {
            prompt: prompt.to_owned(),
            option_creative: option_creative.to_owned(),
            option_analytical: option_analytical.to_owned(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn option_creative(&self) -> &str {
        &self.option_creative
    }

    #[must_use]
    pub fn option_analytical(&self) -> &str {
        &self.option_analytical
    }

    /// Option text for the given choice.
    #[must_use]
    pub fn option(&self, choice: Choice) -> &str {
        match choice {
            Choice::Creative => &self.option_creative,
            Choice::Analytical => &self.option_analytical,
        }
    }
}

fn non_blank(value: String, field: &'static str) -> Result<String, QuestionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(QuestionError::Blank { field });
    }
    Ok(trimmed.to_owned())
}

//
// ─── QUESTIONNAIRE ────────────────────────────────────────────────────────────
//

const BUILTIN: [(&str, &str, &str); QUESTION_COUNT] = [
    (
        "Briefs",
        "Start with moodboards and angles",
        "Start with metrics, baseline and constraints",
    ),
    (
        "Brainstorming",
        "Diverge wildly first, sort later",
        "Define criteria first, ideate within bounds",
    ),
    (
        "New campaign",
        "Big concept that people feel",
        "Clear hypothesis you can A/B test",
    ),
    (
        "Copy choice",
        "Memorable voice that zigs",
        "Clarity + relevance from keyword data",
    ),
    (
        "Visual direction",
        "Distinctive art that sparks talk",
        "Guideline-aligned, consistent and legible",
    ),
    (
        "Prioritisation",
        "Back the idea with potential buzz",
        "Back the item with highest projected ROI",
    ),
    (
        "Ambiguity",
        "Explore possibilities",
        "Reduce uncertainty with a small test",
    ),
    (
        "Feedback",
        "Audience gut-feel matters most",
        "Quant feedback matters most",
    ),
    (
        "Iteration",
        "Keep crafting until it \u{2018}clicks\u{2019}",
        "Ship, measure, then optimize",
    ),
    (
        "Wins",
        "Talk about concept & craft",
        "Talk about lift, CAC, ROAS, CTR",
    ),
];

/// The fixed, ordered set of questions shown in a session.
///
/// Always holds exactly [`QUESTION_COUNT`] questions and is never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    questions: [Question; QUESTION_COUNT],
}

impl Questionnaire {
    #[must_use]
    pub fn new(questions: [Question; QUESTION_COUNT]) -> Self {
        Self { questions }
    }

    /// The creativity vs. analytics questionnaire shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN.map(|(prompt, creative, analytical)| {
            Question::from_static(prompt, creative, analytical)
        }))
    }

    /// Question at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question; QUESTION_COUNT] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        QUESTION_COUNT
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::builtin()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
