use dioxus::prelude::*;
use tracing::warn;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState};

const FEATURES: [(&str, &str); 3] = [
    (
        "Smart Extraction",
        "Automatically identifies topics and learning goals from your uploaded documents.",
    ),
    (
        "Relatable Learning",
        "Uses real-world analogies and simple language to make complex topics easy to grasp.",
    ),
    (
        "Mastery Checks",
        "Integrated quizzes at the end of every session to ensure you truly understand the material.",
    ),
];

#[component]
pub fn UploadView() -> Element {
    let ctx = use_context::<AppContext>();
    let accepted = ctx.accepted_types();
    let mut path = use_signal(|| ctx.initial_path());
    let status = use_signal(|| ViewState::Idle);

    let study = ctx.study();
    let submit = use_callback(move |()| {
        let raw = path.read().trim().to_string();
        if raw.is_empty() {
            return;
        }
        let study = study.clone();
        let mut status = status;
        status.set(ViewState::Loading);
        spawn(async move {
            match study.upload_path(&raw).await {
                Ok(()) => status.set(ViewState::Idle),
                Err(err) => {
                    warn!(%err, "syllabus upload rejected");
                    status.set(ViewState::Error(ViewError::from(&err)));
                }
            }
        });
    });

    let loading = status() == ViewState::Loading;
    rsx! {
        div { class: "page upload-page",
            header { class: "hero",
                h1 { class: "hero-title",
                    "Master any syllabus"
                    br {}
                    span { class: "hero-accent", "with your personal AI tutor." }
                }
                p { class: "hero-subtitle",
                    "Upload your syllabus, curriculum, or even just a list of topics. We'll break it down into manageable lessons, analogies, and quizzes tailored just for you."
                }
            }
            div { class: "upload-card",
                label { class: "upload-label", r#for: "syllabus-path", "Upload your syllabus" }
                p { class: "upload-hint",
                    "PDF, Images, or text files supported. Let AI parse your learning journey."
                }
                div { class: "upload-row",
                    input {
                        id: "syllabus-path",
                        class: "upload-input",
                        r#type: "text",
                        placeholder: "/path/to/syllabus.pdf",
                        value: "{path}",
                        disabled: loading,
                        oninput: move |evt| path.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: loading,
                        onclick: move |_| submit.call(()),
                        "Upload"
                    }
                }
                p { class: "upload-types", "Accepted: {accepted}" }
                if let ViewState::Error(err) = status() {
                    p { class: "upload-error", "{err.message()}" }
                }
            }
            div { class: "features",
                for (title, body) in FEATURES {
                    div { class: "feature-card", key: "{title}",
                        h3 { "{title}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}
