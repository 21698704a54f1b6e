use std::sync::Arc;

use proptest::prelude::*;
use quiz_core::time::fixed_clock;
use quiz_core::{Choice, ProfileLabel, QUESTION_COUNT, QuizEvent, classify};
use services::{ExportService, QuizScreen, QuizService};
use storage::{ExportLocation, FsExportSink, InMemoryExportSink};

fn answer_all(quiz: &mut QuizService, choices: &[Choice]) {
    for (index, choice) in choices.iter().enumerate() {
        quiz.dispatch(QuizEvent::SelectOption {
            index,
            choice: *choice,
        });
        quiz.dispatch(QuizEvent::Advance);
    }
}

#[tokio::test]
async fn quiz_flow_exports_csv_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let exports = ExportService::new(fixed_clock(), Arc::new(FsExportSink::new(tmp.path())));
    let mut quiz = QuizService::builtin().with_display_name(Some("Morgan".to_string()));

    let mut choices = vec![Choice::Creative; 6];
    choices.extend([Choice::Analytical; 4]);
    answer_all(&mut quiz, &choices);

    let QuizScreen::Result(screen) = quiz.screen() else {
        panic!("quiz should be complete");
    };
    assert_eq!(screen.result.label(), ProfileLabel::CreativeMaven);
    assert_eq!(screen.summary.tally, "6\u{d7}A / 4\u{d7}B");

    let receipt = exports.export(&quiz).await.expect("export");
    let ExportLocation::File(path) = receipt.location else {
        panic!("expected file location");
    };
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("quiz_result_2023-11-14_221320.csv")
    );
    let csv = tokio::fs::read_to_string(path).await.expect("read export");
    assert_eq!(
        csv,
        "name,profile,creative_count,analytical_count,timestamp_utc\n\
         Morgan,Creative Maven,6,4,2023-11-14_221320\n"
    );
}

#[test]
fn navigation_back_preserves_answers_for_rescoring() {
    let mut quiz = QuizService::builtin();
    answer_all(&mut quiz, &[Choice::Analytical; QUESTION_COUNT - 1]);
    assert!(!quiz.is_complete());

    // Revisit two earlier questions and change one answer.
    quiz.dispatch(QuizEvent::GoBack);
    quiz.dispatch(QuizEvent::GoBack);
    let QuizScreen::Question(screen) = quiz.screen() else {
        panic!("expected question");
    };
    assert_eq!(screen.index, QUESTION_COUNT - 3);
    assert_eq!(screen.selected, Some(Choice::Analytical));

    quiz.dispatch(QuizEvent::SelectOption {
        index: QUESTION_COUNT - 3,
        choice: Choice::Creative,
    });
    quiz.dispatch(QuizEvent::Advance);
    quiz.dispatch(QuizEvent::Advance);
    // Last question left unanswered and finished: default-fill counts it as creative.
    assert!(quiz.dispatch(QuizEvent::Finish).is_applied());

    let result = quiz.result().expect("complete");
    assert_eq!(result.creative_count(), 2);
    assert_eq!(result.analytical_count(), 8);
    assert_eq!(result.label(), ProfileLabel::AnalyticalAce);
}

#[tokio::test]
async fn restart_blocks_export_until_complete_again() {
    let sink = InMemoryExportSink::new();
    let exports = ExportService::new(fixed_clock(), Arc::new(sink.clone()));
    let mut quiz = QuizService::builtin();

    answer_all(&mut quiz, &[Choice::Creative; QUESTION_COUNT]);
    exports.export(&quiz).await.expect("first export");

    quiz.dispatch(QuizEvent::Restart);
    assert!(exports.export(&quiz).await.is_err());

    answer_all(&mut quiz, &[Choice::Analytical; QUESTION_COUNT]);
    // Same fixed instant, same file name: the sink refuses to overwrite.
    assert!(exports.export(&quiz).await.is_err());
    assert_eq!(sink.delivered().expect("delivered").len(), 1);
}

fn choice_strategy() -> impl Strategy<Value = Choice> {
    prop_oneof![Just(Choice::Creative), Just(Choice::Analytical)]
}

proptest! {
    #[test]
    fn export_profile_matches_classification(
        choices in proptest::collection::vec(choice_strategy(), QUESTION_COUNT),
    ) {
        let exports = ExportService::in_memory(fixed_clock());
        let mut quiz = QuizService::builtin();
        answer_all(&mut quiz, &choices);

        let export = exports.prepare_for(&quiz).expect("complete");
        let expected = classify(quiz.session().answers());

        prop_assert_eq!(export.record.profile.as_str(), expected.label().as_str());
        prop_assert_eq!(export.record.creative_count + export.record.analytical_count, 10);
    }
}
