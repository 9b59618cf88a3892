use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{
    ExtractionError, GenerationError, StudyHandle, StudyRuntime, Tutor, TutorError,
};
use syllabus_core::model::{Document, TeachingSession, TopicDraft};
use syllabus_core::{AppState, StudyConfig};

use crate::context::{UiApp, build_app_context};
use crate::views::{StudyScreen, StudyShell};

/// Tutor for views that never reach the network.
struct OfflineTutor;

#[async_trait]
impl Tutor for OfflineTutor {
    async fn extract_topics(&self, _document: &Document) -> Result<Vec<TopicDraft>, ExtractionError> {
        Err(TutorError::Disabled.into())
    }

    async fn generate_lesson(
        &self,
        _topic_title: &str,
        _context: &str,
    ) -> Result<TeachingSession, GenerationError> {
        Err(TutorError::Disabled.into())
    }
}

struct TestApp {
    study: StudyHandle,
}

impl UiApp for TestApp {
    fn study(&self) -> StudyHandle {
        self.study.clone()
    }

    fn initial_path(&self) -> Option<String> {
        Some("/tmp/biology.pdf".to_string())
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Screen(AppState),
    Shell,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Screen(state) => rsx! { StudyScreen { state } },
        ViewKind::Shell => rsx! { StudyShell {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub runtime: StudyRuntime,
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

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let (runtime, study) = StudyRuntime::new(StudyConfig::default(), Arc::new(OfflineTutor));
    let app = Arc::new(TestApp { study });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });
    ViewHarness { dom, runtime }
}

/// Render `state` once and return the HTML.
pub fn render_screen(state: AppState) -> String {
    let mut harness = setup_view_harness(ViewKind::Screen(state));
    harness.rebuild();
    harness.render()
}
