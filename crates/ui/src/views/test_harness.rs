use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::time::fixed_clock;
use services::{ExportService, QuizService};

use crate::context::{UiApp, build_app_context};
use crate::views::{ExportState, QuizView, ResultPanel};
use crate::vm::{QuizScreenVm, QuizVm};

#[derive(Clone)]
struct TestApp {
    quiz: QuizService,
    export_service: Arc<ExportService>,
}

impl UiApp for TestApp {
    fn app_version(&self) -> &'static str {
        "0.0.0-test"
    }

    fn new_quiz(&self) -> QuizService {
        self.quiz.clone()
    }

    fn export_service(&self) -> Arc<ExportService> {
        Arc::clone(&self.export_service)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mount the quiz view over a pre-driven session.
pub fn setup_view_harness(quiz: QuizService) -> ViewHarness {
    let app = Arc::new(TestApp {
        quiz,
        export_service: Arc::new(ExportService::in_memory(fixed_clock())),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app });
    ViewHarness { dom }
}

#[derive(Props, Clone)]
struct ResultHarnessProps {
    quiz: QuizService,
    export_state: ExportState,
}

impl PartialEq for ResultHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ResultHarness(props: ResultHarnessProps) -> Element {
    let vm = QuizVm::new(props.quiz.clone());
    match vm.screen() {
        QuizScreenVm::Result(result) => rsx! {
            ResultPanel {
                result,
                export_state: props.export_state.clone(),
                on_download: move |()| {},
                on_restart: move |()| {},
            }
        },
        QuizScreenVm::Question(_) => rsx! {
            p { "not complete" }
        },
    }
}

/// Mount the result panel alone with a given download state.
pub fn setup_result_harness(quiz: QuizService, export_state: ExportState) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ResultHarness,
        ResultHarnessProps { quiz, export_state },
    );
    ViewHarness { dom }
}
