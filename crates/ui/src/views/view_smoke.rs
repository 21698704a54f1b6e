use quiz_core::{Choice, QUESTION_COUNT, QuizEvent};
use services::QuizService;

use super::test_harness::{setup_result_harness, setup_view_harness};
use crate::views::{ExportState, ViewError};

fn completed(choices: &[Choice], name: Option<&str>) -> QuizService {
    let mut quiz = QuizService::builtin().with_display_name(name.map(str::to_string));
    for (index, choice) in choices.iter().enumerate() {
        quiz.dispatch(QuizEvent::SelectOption {
            index,
            choice: *choice,
        });
        quiz.dispatch(QuizEvent::Advance);
    }
    quiz
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(QuizService::builtin());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("1. Briefs"), "missing heading in {html}");
    assert!(html.contains("Question 1 of 10"), "missing counter in {html}");
    assert!(html.contains("A. Start with moodboards and angles"), "missing option in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
    assert!(!html.contains("See my result"), "unexpected finish button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_offers_finish_on_last_question() {
    let mut quiz = QuizService::builtin();
    for _ in 0..QUESTION_COUNT - 1 {
        quiz.dispatch(QuizEvent::Advance);
    }
    let mut harness = setup_view_harness(quiz);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 10 of 10"), "missing counter in {html}");
    assert!(html.contains("See my result"), "missing finish button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_result_for_completed_session() {
    let mut choices = vec![Choice::Analytical; 7];
    choices.extend([Choice::Creative; 3]);
    let mut harness = setup_view_harness(completed(&choices, Some("Ada")));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Ada = Analytical Ace"), "missing headline in {html}");
    assert!(html.contains("Your Result Summary"), "missing summary in {html}");
    assert!(html.contains("Download my result (.csv)"), "missing download in {html}");
    assert!(html.contains("Start over"), "missing restart in {html}");
    assert!(!html.contains("Question 1 of 10"), "question still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_panel_smoke_renders_saved_location() {
    let quiz = completed(&[Choice::Creative; QUESTION_COUNT], None);
    let state = ExportState::Saved {
        location: "memory:quiz_result_2023-11-14_221320.csv".to_string(),
    };
    let mut harness = setup_result_harness(quiz, state);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("You = Creative Maven"), "missing headline in {html}");
    assert!(
        html.contains("Saved to memory:quiz_result_2023-11-14_221320.csv"),
        "missing saved location in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn result_panel_smoke_renders_export_error() {
    let quiz = completed(&[Choice::Creative; QUESTION_COUNT], None);
    let mut harness = setup_result_harness(quiz, ExportState::Error(ViewError::ExportFailed));
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains(ViewError::ExportFailed.message()),
        "missing error message in {html}"
    );
}
