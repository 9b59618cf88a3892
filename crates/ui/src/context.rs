use std::sync::Arc;

use services::StudyHandle;
use syllabus_core::model::SUPPORTED_MIME_TYPES;

pub trait UiApp: Send + Sync {
    fn study(&self) -> StudyHandle;

    /// Path typed into the upload field on first render.
    fn initial_path(&self) -> Option<String> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    study: StudyHandle,
    initial_path: Option<String>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            study: app.study(),
            initial_path: app.initial_path(),
        }
    }

    #[must_use]
    pub fn study(&self) -> StudyHandle {
        self.study.clone()
    }

    #[must_use]
    pub fn initial_path(&self) -> String {
        self.initial_path.clone().unwrap_or_default()
    }

    /// Human-readable list of accepted upload types.
    #[must_use]
    pub fn accepted_types(&self) -> String {
        SUPPORTED_MIME_TYPES.join(", ")
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
