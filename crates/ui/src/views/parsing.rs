use dioxus::prelude::*;

#[component]
pub fn ParsingView(document_name: String) -> Element {
    rsx! {
        div { class: "page waiting-page",
            div { class: "spinner" }
            h2 { "Scanning Your Syllabus..." }
            p { "Gemini AI is identifying core topics and learning objectives." }
            if !document_name.is_empty() {
                p { class: "waiting-file", "{document_name}" }
            }
        }
    }
}

#[component]
pub fn LessonLoadingView(topic: String) -> Element {
    rsx! {
        div { class: "page waiting-page",
            div { class: "spinner" }
            h2 { "Preparing Your Lesson..." }
            if !topic.is_empty() {
                p { class: "waiting-topic", "{topic}" }
            }
            p { class: "waiting-quote", "\"Teaching is the highest form of understanding.\"" }
        }
    }
}
