use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::report;
use crate::vm::{BreakVm, FocusClockVm};

#[component]
pub fn FocusClock(vm: FocusClockVm) -> Element {
    let class = if vm.paused {
        "focus-clock focus-clock--paused"
    } else {
        "focus-clock"
    };
    rsx! {
        div { class: "{class}", role: "timer",
            span { class: "focus-clock-label", "Focus Mode" }
            span { class: "focus-clock-time", "{vm.display}" }
        }
    }
}

/// Modal shown between focus sessions. It stays up until dismissed, even
/// after the countdown has run out.
#[component]
pub fn BreakOverlay(vm: BreakVm) -> Element {
    let ctx = use_context::<AppContext>();
    let study = ctx.study();
    let button_class = if vm.done {
        "btn btn-primary"
    } else {
        "btn btn-outline"
    };

    rsx! {
        div { class: "overlay",
            div { class: "modal break-modal", role: "dialog",
                h2 { "Time for a break!" }
                p { "{vm.message}" }
                div { class: "break-countdown", "{vm.display}" }
                button {
                    class: "{button_class}",
                    r#type: "button",
                    onclick: move |_| report(study.dismiss_break()),
                    "{vm.dismiss_label}"
                }
            }
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    let ctx = use_context::<AppContext>();
    let study = ctx.study();

    rsx! {
        div { class: "error-banner", role: "alert",
            span { "{message}" }
            button {
                class: "error-dismiss",
                r#type: "button",
                title: "Dismiss",
                onclick: move |_| report(study.dismiss_error()),
                "×"
            }
        }
    }
}

#[component]
pub fn ResetConfirm(prompt: String) -> Element {
    let ctx = use_context::<AppContext>();
    let study = ctx.study();
    let study_for_cancel = study.clone();

    rsx! {
        div { class: "overlay",
            div { class: "modal reset-modal", role: "dialog",
                p { "{prompt}" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| report(study_for_cancel.cancel_reset()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| report(study.confirm_reset()),
                        "Reset"
                    }
                }
            }
        }
    }
}
