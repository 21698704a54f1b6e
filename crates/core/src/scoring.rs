use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Answer, Answers, Choice, QUESTION_COUNT};

/// Category an unanswered question counts toward when tallying.
///
/// Incomplete runs are scoreable: every `Unanswered` slot is tallied as this
/// choice. Whether an incomplete quiz should be scoreable at all is an open
/// product decision; changing this constant changes results for such runs.
pub const DEFAULT_UNANSWERED: Choice = Choice::Creative;

/// Lead one category needs over the other to earn its label.
pub const DECISIVE_MARGIN: u32 = 2;

//
// ─── PROFILE LABEL ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileLabel {
    CreativeMaven,
    AnalyticalAce,
    HybridSynthesizer,
}

impl ProfileLabel {
    /// Human-facing label text. Also used verbatim in the export record.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileLabel::CreativeMaven => "Creative Maven",
            ProfileLabel::AnalyticalAce => "Analytical Ace",
            ProfileLabel::HybridSynthesizer => "Hybrid Synthesizer",
        }
    }

    /// One-sentence description shown with the result.
    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            ProfileLabel::CreativeMaven => {
                "You lead with imagination, concepting, brand story and distinctive ideas, then bring data in to refine."
            }
            ProfileLabel::AnalyticalAce => {
                "You lead with structure, evidence and measurement, turning ambiguity into clear, testable action."
            }
            ProfileLabel::HybridSynthesizer => {
                "You blend bold ideas with rigorous evaluation, switching gears based on context. Best of both worlds."
            }
        }
    }
}

impl fmt::Display for ProfileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── RESULT ───────────────────────────────────────────────────────────────────
//

/// Classification of a completed answer list. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    label: ProfileLabel,
    creative_count: u32,
    analytical_count: u32,
}

impl QuizResult {
    #[must_use]
    pub fn label(&self) -> ProfileLabel {
        self.label
    }

    #[must_use]
    pub fn creative_count(&self) -> u32 {
        self.creative_count
    }

    #[must_use]
    pub fn analytical_count(&self) -> u32 {
        self.analytical_count
    }
}

/// Tally the answers and map the tally to a profile label.
///
/// Unanswered slots count as [`DEFAULT_UNANSWERED`].
#[must_use]
pub fn classify(answers: &Answers) -> QuizResult {
    let creative_count = answers
        .iter()
        .map(|answer| resolve(*answer))
        .filter(|choice| *choice == Choice::Creative)
        .count();
    // At most QUESTION_COUNT, always fits.
    let creative_count = u32::try_from(creative_count).unwrap_or(u32::MAX);
    let total = u32::try_from(QUESTION_COUNT).unwrap_or(u32::MAX);
    let analytical_count = total.saturating_sub(creative_count);

    let label = if creative_count >= analytical_count + DECISIVE_MARGIN {
        ProfileLabel::CreativeMaven
    } else if analytical_count >= creative_count + DECISIVE_MARGIN {
        ProfileLabel::AnalyticalAce
    } else {
        ProfileLabel::HybridSynthesizer
    };

    QuizResult {
        label,
        creative_count,
        analytical_count,
    }
}

fn resolve(answer: Answer) -> Choice {
    answer.choice().unwrap_or(DEFAULT_UNANSWERED)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_split(creative: usize) -> Answers {
        let mut answers = [Answer::Analytical; QUESTION_COUNT];
        for slot in answers.iter_mut().take(creative) {
            *slot = Answer::Creative;
        }
        answers
    }

    #[test]
    fn margin_boundaries() {
        let cases = [
            (10, ProfileLabel::CreativeMaven),
            (7, ProfileLabel::CreativeMaven),
            (6, ProfileLabel::CreativeMaven),
            (5, ProfileLabel::HybridSynthesizer),
            (4, ProfileLabel::AnalyticalAce),
            (0, ProfileLabel::AnalyticalAce),
        ];
        for (creative, expected) in cases {
            let result = classify(&with_split(creative));
            assert_eq!(result.label(), expected, "creative={creative}");
            assert_eq!(result.creative_count() as usize, creative);
            assert_eq!(result.analytical_count() as usize, QUESTION_COUNT - creative);
        }
    }

    #[test]
    fn all_unanswered_scores_like_all_creative() {
        let unanswered = classify(&[Answer::Unanswered; QUESTION_COUNT]);
        let creative = classify(&[Answer::Creative; QUESTION_COUNT]);

        assert_eq!(unanswered, creative);
        assert_eq!(unanswered.label(), ProfileLabel::CreativeMaven);
        assert_eq!(unanswered.creative_count(), 10);
        assert_eq!(unanswered.analytical_count(), 0);
    }

    #[test]
    fn unanswered_slots_tip_a_balanced_run() {
        // 4 analytical, 4 creative, 2 unanswered -> 6/4 after default-fill.
        use Answer::{Analytical as B, Creative as A, Unanswered as U};
        let answers = [B, B, A, A, A, A, U, U, B, B];

        let result = classify(&answers);
        assert_eq!(result.creative_count(), 6);
        assert_eq!(result.label(), ProfileLabel::CreativeMaven);
    }

    #[test]
    fn label_strings() {
        assert_eq!(ProfileLabel::CreativeMaven.to_string(), "Creative Maven");
        assert_eq!(ProfileLabel::AnalyticalAce.to_string(), "Analytical Ace");
        assert_eq!(
            ProfileLabel::HybridSynthesizer.to_string(),
            "Hybrid Synthesizer"
        );
        assert!(ProfileLabel::HybridSynthesizer.blurb().ends_with("Best of both worlds."));
    }

    fn answer_strategy() -> impl Strategy<Value = Answer> {
        prop_oneof![
            Just(Answer::Unanswered),
            Just(Answer::Creative),
            Just(Answer::Analytical)
        ]
    }

    fn answers_strategy() -> impl Strategy<Value = Answers> {
        proptest::array::uniform10(answer_strategy())
    }

    proptest! {
        #[test]
        fn counts_always_sum_to_ten(answers in answers_strategy()) {
            let result = classify(&answers);
            prop_assert_eq!(result.creative_count() + result.analytical_count(), 10);
        }

        #[test]
        fn classify_is_deterministic(answers in answers_strategy()) {
            prop_assert_eq!(classify(&answers), classify(&answers));
        }

        #[test]
        fn label_agrees_with_margin(answers in answers_strategy()) {
            let result = classify(&answers);
            let c = i64::from(result.creative_count());
            let a = i64::from(result.analytical_count());
            let expected = match c - a {
                d if d >= 2 => ProfileLabel::CreativeMaven,
                d if d <= -2 => ProfileLabel::AnalyticalAce,
                _ => ProfileLabel::HybridSynthesizer,
            };
            prop_assert_eq!(result.label(), expected);
        }
    }
}
