use dioxus::prelude::*;
use syllabus_core::{AppPhase, AppState};

use crate::context::AppContext;
use crate::views::{
    BreakOverlay, DashboardView, ErrorBanner, FocusClock, LessonLoadingView, LessonView,
    ParsingView, ResetConfirm, UploadView, report,
};
use crate::vm::{map_break, map_dashboard, map_focus_clock, map_lesson};

/// Follows the runtime's published state and renders it.
#[component]
pub fn StudyShell() -> Element {
    let ctx = use_context::<AppContext>();
    let study = ctx.study();
    let state = use_signal(|| study.snapshot());

    use_future(move || {
        let mut updates = study.subscribe();
        let mut state = state;
        async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                state.set(next);
            }
        }
    });

    rsx! { StudyScreen { state: state() } }
}

#[component]
pub fn StudyScreen(state: AppState) -> Element {
    let ctx = use_context::<AppContext>();
    let study = ctx.study();
    let phase = state.phase();
    let show_reset = matches!(phase, AppPhase::Learning | AppPhase::Teaching);
    let clock = map_focus_clock(&state);
    let break_vm = map_break(&state);
    let error = state.error().map(str::to_string);
    let reset_prompt = state.reset_prompt();

    let body = match phase {
        AppPhase::Idle => rsx! { UploadView {} },
        AppPhase::Parsing => rsx! {
            ParsingView { document_name: state.document_name().unwrap_or_default().to_string() }
        },
        AppPhase::Learning => rsx! { DashboardView { vm: map_dashboard(&state) } },
        AppPhase::Teaching => match (state.session(), state.quiz()) {
            (Some(session), Some(quiz)) => rsx! { LessonView { vm: map_lesson(session, quiz) } },
            _ => rsx! {
                LessonLoadingView {
                    topic: state.active_topic().map(|t| t.title().to_string()).unwrap_or_default(),
                }
            },
        },
    };

    rsx! {
        div { class: "app",
            nav { class: "topbar",
                span { class: "brand", "SyllabusAI" }
                div { class: "topbar-actions",
                    if let Some(vm) = clock {
                        FocusClock { vm }
                    }
                    if show_reset {
                        button {
                            class: "btn btn-link",
                            r#type: "button",
                            onclick: move |_| report(study.request_reset()),
                            "Reset"
                        }
                    }
                }
            }
            main { class: "content",
                if let Some(message) = error {
                    ErrorBanner { message }
                }
                {body}
            }
            if let Some(vm) = break_vm {
                BreakOverlay { vm }
            }
            if let Some(prompt) = reset_prompt {
                ResetConfirm { prompt: prompt.to_string() }
            }
        }
    }
}
