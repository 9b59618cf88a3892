use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::report;
use crate::vm::{LessonVm, QuestionVm, QuizSummaryVm, QuizVm};

#[component]
pub fn LessonView(vm: LessonVm) -> Element {
    let ctx = use_context::<AppContext>();
    let study = ctx.study();

    rsx! {
        div { class: "page lesson-page",
            header { class: "lesson-header",
                button {
                    class: "btn btn-ghost lesson-back",
                    r#type: "button",
                    onclick: move |_| report(study.back()),
                    "← Back"
                }
                div {
                    span { class: "pill", "In Progress" }
                    h1 { class: "lesson-title", "{vm.topic}" }
                    p { class: "lesson-subtitle", "Let's make this topic easy to understand together." }
                }
            }
            div { class: "lesson-grid",
                div { class: "lesson-main",
                    section { class: "lesson-card lesson-explanation",
                        h3 { "The Big Picture" }
                        div { class: "lesson-prose", dangerous_inner_html: "{vm.explanation_html}" }
                    }
                    if !vm.analogies.is_empty() {
                        section { class: "lesson-analogies",
                            h3 { "Think of it like this..." }
                            for (number, analogy) in (1..).zip(vm.analogies.iter()) {
                                blockquote { class: "analogy", key: "{number}",
                                    span { class: "analogy-number", "{number}" }
                                    "\"{analogy}\""
                                }
                            }
                        }
                    }
                    if !vm.examples.is_empty() {
                        section { class: "lesson-card lesson-examples",
                            h3 { "Real-World Use Cases" }
                            for (i, example) in vm.examples.iter().enumerate() {
                                div { class: "example", key: "{i}",
                                    h4 { "{example.title}" }
                                    p { "{example.detail}" }
                                }
                            }
                        }
                    }
                }
                aside { class: "lesson-side",
                    section { class: "takeaways",
                        h3 { "Key Takeaways" }
                        ol {
                            for (i, concept) in vm.key_concepts.iter().enumerate() {
                                li { key: "{i}", "{concept}" }
                            }
                        }
                    }
                    div { class: "lesson-card quiz-teaser",
                        h4 { "Ready to test yourself?" }
                        p { "Complete the quick quiz below to master this topic." }
                    }
                }
            }
            QuizPanel { vm: vm.quiz.clone() }
        }
    }
}

#[component]
pub fn QuizPanel(vm: QuizVm) -> Element {
    rsx! {
        section { class: "quiz-section",
            match vm {
                QuizVm::Question(question) => rsx! { QuestionCard { vm: question } },
                QuizVm::Summary(summary) => rsx! { QuizSummary { vm: summary } },
            }
        }
    }
}

#[component]
fn QuestionCard(vm: QuestionVm) -> Element {
    let ctx = use_context::<AppContext>();
    let study = ctx.study();
    let study_for_next = study.clone();
    let answered = vm.answered;

    rsx! {
        div { class: "quiz",
            div { class: "quiz-header",
                div {
                    span { class: "quiz-kicker", "Quick Challenge" }
                    h2 { "Test Your Knowledge" }
                }
                div { class: "quiz-dots",
                    for (i, class) in vm.dots.iter().enumerate() {
                        div { class: "{class}", key: "{i}" }
                    }
                }
            }
            p { class: "quiz-question", "{vm.prompt}" }
            div { class: "quiz-options",
                for (i, option) in vm.options.iter().cloned().enumerate() {
                    button {
                        key: "{i}",
                        class: "{option.class}",
                        r#type: "button",
                        disabled: answered,
                        onclick: {
                            let study = study.clone();
                            let label = option.label.clone();
                            move |_| report(study.answer(label.clone()))
                        },
                        "{option.label}"
                    }
                }
            }
            if let Some(explanation) = vm.explanation.as_ref() {
                div { class: "quiz-feedback",
                    p { class: "quiz-feedback-title", "Great Insight!" }
                    p { "{explanation}" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| report(study_for_next.advance_quiz()),
                        "{vm.next_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn QuizSummary(vm: QuizSummaryVm) -> Element {
    let ctx = use_context::<AppContext>();
    let study = ctx.study();
    let study_for_retake = study.clone();

    rsx! {
        div { class: "quiz-summary",
            span { class: "quiz-xp", "{vm.xp_label}" }
            h2 { "Boom! Mastery Achieved." }
            p { "{vm.score_line}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| report(study.complete()),
                "Finish & Save Progress"
            }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| report(study_for_retake.retake_quiz()),
                "Retake to perfect"
            }
        }
    }
}
