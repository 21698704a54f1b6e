use serde::{Deserialize, Serialize};

use crate::model::question::QUESTION_COUNT;

/// One of the two options offered by every question.
///
/// Option "A" always leans creative and option "B" always leans analytical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Creative,
    Analytical,
}

impl Choice {
    /// Short option letter shown next to the option text.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Choice::Creative => 'A',
            Choice::Analytical => 'B',
        }
    }
}

/// Recorded state of a single question slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Answer {
    #[default]
    Unanswered,
    Creative,
    Analytical,
}

impl Answer {
    /// The chosen option, or `None` if the slot has not been answered.
    #[must_use]
    pub fn choice(self) -> Option<Choice> {
        match self {
            Answer::Unanswered => None,
            Answer::Creative => Some(Choice::Creative),
            Answer::Analytical => Some(Choice::Analytical),
        }
    }

    #[must_use]
    pub fn is_answered(self) -> bool {
        !matches!(self, Answer::Unanswered)
    }
}

impl From<Choice> for Answer {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::Creative => Answer::Creative,
            Choice::Analytical => Answer::Analytical,
        }
    }
}

/// Answers parallel to the questionnaire, one slot per question.
pub type Answers = [Answer; QUESTION_COUNT];
