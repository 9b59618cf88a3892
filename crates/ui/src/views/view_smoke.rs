use syllabus_core::controller::{EXTRACTION_FAILED_MESSAGE, RESET_PROMPT};
use syllabus_core::model::{Document, TopicId};
use syllabus_core::{AppState, Event, StudyConfig};

use super::test_harness::{ViewKind, render_screen, setup_view_harness};
use crate::vm::fixtures::{dashboard, focus_ticks, step, teaching};

#[tokio::test(flavor = "current_thread")]
async fn idle_screen_renders_upload_form() {
    let html = render_screen(AppState::default());
    assert!(html.contains("Upload your syllabus"), "missing upload label in {html}");
    assert!(html.contains("Smart Extraction"), "missing features in {html}");
    assert!(html.contains("/tmp/biology.pdf"), "missing initial path in {html}");
    assert!(!html.contains("Reset"), "reset offered while idle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_topics_and_progress() {
    let html = render_screen(dashboard(StudyConfig::default()));
    assert!(html.contains("Your Personal Mastery Path"), "missing heading in {html}");
    assert!(html.contains("UNIT 1"), "missing unit label in {html}");
    assert!(html.contains("Photosynthesis"), "missing topic in {html}");
    assert!(html.contains("Respiration"), "missing topic in {html}");
    assert!(html.contains("Teach Me"), "missing lesson button in {html}");
    assert!(html.contains("0%"), "missing progress in {html}");
    assert!(html.contains("Reset"), "missing reset in {html}");
    assert!(!html.contains("Focus Mode"), "clock shown on dashboard in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completed_topic_renders_as_done() {
    let (state, _) = step(
        dashboard(StudyConfig::default()),
        Event::ToggleComplete(TopicId::new("t1")),
    );
    let html = render_screen(state);
    assert!(html.contains("topic-card--done"), "missing done card in {html}");
    assert!(html.contains("Review"), "missing review button in {html}");
    assert!(html.contains("50%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn pending_lesson_renders_loading_view() {
    let (state, _) = step(
        dashboard(StudyConfig::default()),
        Event::SelectTopic(TopicId::new("t2")),
    );
    let html = render_screen(state);
    assert!(html.contains("Preparing Your Lesson..."), "missing loading view in {html}");
    assert!(html.contains("Respiration"), "missing topic title in {html}");
    assert!(!html.contains("Focus Mode"), "clock shown before the lesson in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_renders_content_clock_and_first_question() {
    let html = render_screen(teaching(StudyConfig::default()));
    assert!(html.contains("The Big Picture"), "missing explanation in {html}");
    assert!(html.contains("<strong>chefs</strong>"), "markdown not rendered in {html}");
    assert!(html.contains("A solar kitchen"), "missing analogy in {html}");
    assert!(html.contains("Greenhouses stretch daylight."), "missing example in {html}");
    assert!(html.contains("Sugar out"), "missing key concept in {html}");
    assert!(html.contains("Focus Mode"), "missing clock in {html}");
    assert!(html.contains("30:00"), "missing clock time in {html}");
    assert!(html.contains("What feeds a plant?"), "missing question in {html}");
    assert!(!html.contains("Great Insight!"), "feedback before answering in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answered_question_shows_feedback() {
    let (state, _) = step(teaching(StudyConfig::default()), Event::Answer("Rocks".into()));
    let html = render_screen(state);
    assert!(html.contains("Great Insight!"), "missing feedback in {html}");
    assert!(html.contains("Light is the fuel."), "missing explanation in {html}");
    assert!(html.contains("quiz-option--correct"), "missing correct marker in {html}");
    assert!(html.contains("quiz-option--incorrect"), "missing incorrect marker in {html}");
    assert!(html.contains("Next Challenge"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finished_quiz_renders_summary() {
    let mut state = teaching(StudyConfig::default());
    for answer in ["Light", "Leaves"] {
        state = step(state, Event::Answer(answer.into())).0;
        state = step(state, Event::AdvanceQuiz).0;
    }
    let html = render_screen(state);
    assert!(html.contains("Boom! Mastery Achieved."), "missing summary in {html}");
    assert!(html.contains("You got 2 out of 2 correctly."), "missing score in {html}");
    assert!(html.contains("+20 XP"), "missing xp in {html}");
    assert!(html.contains("Retake to perfect"), "missing retake in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn break_overlay_covers_the_lesson() {
    let config = StudyConfig::default().with_focus_secs(5).with_break_secs(300);
    let html = render_screen(focus_ticks(teaching(config), 5));
    assert!(html.contains("Time for a break!"), "missing break modal in {html}");
    assert!(html.contains("5:00"), "missing countdown in {html}");
    assert!(html.contains("Skip Break"), "missing dismiss label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn extraction_failure_shows_error_on_upload_screen() {
    let document = Document::new("notes.txt", "text/plain", b"x".to_vec()).unwrap();
    let (state, _) = step(AppState::default(), Event::Upload(document));
    let (state, _) = step(state, Event::ExtractionFailed("boom".into()));
    let html = render_screen(state);
    assert!(html.contains(EXTRACTION_FAILED_MESSAGE), "missing error in {html}");
    assert!(html.contains("Upload your syllabus"), "missing upload form in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_request_asks_for_confirmation() {
    let (state, _) = step(dashboard(StudyConfig::default()), Event::RequestReset);
    let html = render_screen(state);
    assert!(html.contains(RESET_PROMPT), "missing prompt in {html}");
    assert!(html.contains("Cancel"), "missing cancel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_renders_the_published_state() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    let document = Document::new("biology.txt", "text/plain", b"Unit 1".to_vec()).unwrap();
    harness.runtime.dispatch(Event::Upload(document));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Scanning Your Syllabus..."), "missing parsing view in {html}");
    assert!(html.contains("biology.txt"), "missing document name in {html}");
}
