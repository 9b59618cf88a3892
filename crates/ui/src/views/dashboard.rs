use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::report;
use crate::vm::{DashboardVm, TopicCardVm};

#[component]
pub fn DashboardView(vm: DashboardVm) -> Element {
    rsx! {
        div { class: "page dashboard-page",
            section { class: "progress-card",
                div { class: "progress-copy",
                    span { class: "pill", "Learning Overview" }
                    h2 { "Your Personal Mastery Path" }
                    p { "{vm.lessons_label}" }
                    if let Some(name) = vm.document_name.as_ref() {
                        p { class: "progress-source", "From {name}" }
                    }
                }
                div { class: "progress-meter",
                    div {
                        class: "progress-ring",
                        style: "--progress: {vm.progress_percent}",
                        span { class: "progress-value", "{vm.progress_label}" }
                    }
                    p { class: "progress-caption", "{vm.completed_label}" }
                }
            }
            ul { class: "topic-list",
                for card in vm.topics.iter().cloned() {
                    TopicCard { key: "{card.id}", card }
                }
            }
        }
    }
}

#[component]
fn TopicCard(card: TopicCardVm) -> Element {
    let ctx = use_context::<AppContext>();
    let study = ctx.study();
    let toggle_id = card.id.clone();
    let select_id = card.id.clone();
    let study_for_select = study.clone();
    let (class, action_class) = if card.completed {
        ("topic-card topic-card--done", "btn btn-outline")
    } else {
        ("topic-card", "btn btn-primary")
    };

    rsx! {
        li { class: "{class}",
            button {
                class: "topic-toggle",
                r#type: "button",
                title: card.toggle_label,
                onclick: move |_| report(study.toggle_complete(toggle_id.clone())),
                if card.completed { "✓" } else { "○" }
            }
            div { class: "topic-body",
                div { class: "topic-meta",
                    span { class: "topic-unit", "{card.unit_label}" }
                    if card.completed {
                        span { class: "topic-done", "DONE" }
                    }
                }
                h3 { class: "topic-title", "{card.title}" }
                p { class: "topic-description", "{card.description}" }
            }
            button {
                class: "{action_class}",
                r#type: "button",
                onclick: move |_| report(study_for_select.select_topic(select_id.clone())),
                "{card.action_label}"
            }
        }
    }
}
