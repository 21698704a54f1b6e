use dioxus::prelude::*;

use crate::views::ExportState;
use crate::vm::{RESULT_TIP, ResultVm};

#[component]
pub fn ResultPanel(
    result: ResultVm,
    export_state: ExportState,
    on_download: EventHandler<()>,
    on_restart: EventHandler<()>,
) -> Element {
    let saving = export_state == ExportState::Saving;

    rsx! {
        section { class: "result-card",
            div { class: "result-headline", "{result.headline}" }
            p { class: "result-blurb", "{result.blurb}" }

            h3 { "Your Result Summary" }
            dl { class: "summary",
                dt { "Profile" }
                dd { "{result.profile}" }

                dt { "Answers" }
                dd { "{result.tally}" }
            }
            p { class: "view-hint", "{RESULT_TIP}" }

            h3 { "Share this on LinkedIn" }
            pre { class: "share-text", "{result.share_text}" }

            div { class: "result-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: saving,
                    onclick: move |_| on_download.call(()),
                    "Download my result (.csv)"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Start over"
                }
            }

            ExportStatus { state: export_state }
        }
    }
}

#[component]
fn ExportStatus(state: ExportState) -> Element {
    match state {
        ExportState::Idle => rsx! {},
        ExportState::Saving => rsx! {
            p { class: "export-status", "Saving..." }
        },
        ExportState::Saved { location } => rsx! {
            p { class: "export-status export-saved", "Saved to {location}" }
        },
        ExportState::Error(err) => rsx! {
            p { class: "export-status export-error", "{err.message()}" }
        },
    }
}
