use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::QuizView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let version = ctx.app_version();

    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "app-footer",
                span { class: "caption", "Built with Dioxus \u{2022} v{version}" }
            }
        }
    }
}
