use dioxus::prelude::*;
use quiz_core::Choice;

use crate::context::AppContext;
use crate::views::result::ResultPanel;
use crate::views::{ExportState, ViewError};
use crate::vm::{QuestionVm, QuizIntent, QuizScreenVm, QuizVm};

const INTRO: &str = "Answer 10 quick A/B choices. There\u{2019}s no \u{201c}right\u{201d} answer \u{2014} we\u{2019}re mapping your default problem-solving style.";
const INTRO_HINT: &str = "Pick the option that feels more natural most of the time.";

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let exports = ctx.export_service();
    let mut vm = use_signal(|| QuizVm::new(ctx.new_quiz()));
    let mut export_state = use_signal(|| ExportState::Idle);

    let screen = vm.read().screen();
    let name_value = vm.read().display_name_input();

    let mut on_intent = move |intent: QuizIntent| {
        let _ = vm.write().apply(intent);
        if intent == QuizIntent::Restart {
            export_state.set(ExportState::Idle);
        }
    };

    let mut on_download = move |()| {
        let prepared = exports.prepare_for(vm.read().service());
        let export = match prepared {
            Ok(export) => export,
            Err(err) => {
                export_state.set(ExportState::Error(ViewError::from_export(&err)));
                return;
            }
        };
        let exports = exports.clone();
        let mut export_state = export_state;
        spawn(async move {
            export_state.set(ExportState::Saving);
            match exports.deliver(&export).await {
                Ok(receipt) => export_state.set(ExportState::Saved {
                    location: receipt.location.to_string(),
                }),
                Err(err) => export_state.set(ExportState::Error(ViewError::from_export(&err))),
            }
        });
    };

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Creativity \u{2194} Analytics Quiz" }
                p { class: "view-subtitle", "{INTRO}" }
                p { class: "view-hint", "{INTRO_HINT}" }
            }
            details { class: "name-expander",
                summary { "Optional: add your name for the result card" }
                label { class: "name-label", r#for: "display-name", "Name (for the result card)" }
                input {
                    id: "display-name",
                    class: "name-input",
                    r#type: "text",
                    value: "{name_value}",
                    oninput: move |evt| vm.write().set_display_name(evt.value()),
                }
            }
            div { class: "view-divider" }
            match screen {
                QuizScreenVm::Question(question) => rsx! {
                    QuestionCard {
                        question,
                        on_intent: move |intent| on_intent(intent),
                    }
                },
                QuizScreenVm::Result(result) => rsx! {
                    ResultPanel {
                        result,
                        export_state: export_state(),
                        on_download: move |()| on_download(()),
                        on_restart: move |()| on_intent(QuizIntent::Restart),
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let group = format!("q{}", question.index);
    let percent = question.progress_percent;
    let creative_checked = question.is_selected(Choice::Creative);
    let analytical_checked = question.is_selected(Choice::Analytical);

    rsx! {
        section { class: "question-card",
            div { class: "quiz-progress",
                progress { max: "100", value: "{percent}" }
                span { class: "quiz-progress-label", "{question.counter}" }
            }
            h3 { class: "question-heading", "{question.heading}" }
            div { class: "question-options", role: "radiogroup",
                label { class: "question-option",
                    input {
                        r#type: "radio",
                        name: "{group}",
                        checked: creative_checked,
                        onchange: move |_| on_intent.call(QuizIntent::Select(Choice::Creative)),
                    }
                    span { "{question.option_a}" }
                }
                label { class: "question-option",
                    input {
                        r#type: "radio",
                        name: "{group}",
                        checked: analytical_checked,
                        onchange: move |_| on_intent.call(QuizIntent::Select(Choice::Analytical)),
                    }
                    span { "{question.option_b}" }
                }
            }
            div { class: "question-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !question.can_go_back,
                    onclick: move |_| on_intent.call(QuizIntent::Back),
                    "Back"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: question.selected.is_none(),
                    onclick: move |_| on_intent.call(QuizIntent::Clear),
                    "Clear"
                }
                if question.is_last {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Finish),
                        "See my result"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Next),
                        "Next"
                    }
                }
            }
        }
    }
}
