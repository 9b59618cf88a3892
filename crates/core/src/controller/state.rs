use std::sync::Arc;

use crate::config::StudyConfig;
use crate::model::{TeachingSession, Topic, TopicId, TopicList};
use crate::quiz::Quiz;
use crate::timer::{BreakCountdown, FocusTimer};

pub const EXTRACTION_FAILED_MESSAGE: &str =
    "Failed to parse syllabus. Please try again with a clear image or text file.";
pub const GENERATION_FAILED_MESSAGE: &str =
    "Could not generate teaching session. Please check your connection.";
pub const RESET_PROMPT: &str = "Start a new study plan? Current progress will be reset.";

/// Top-level screen the app is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Idle,
    Parsing,
    Learning,
    Teaching,
}

/// The whole in-memory application state. Only `transition` changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub(crate) config: StudyConfig,
    pub(crate) phase: AppPhase,
    pub(crate) document_name: Option<String>,
    pub(crate) topics: TopicList,
    pub(crate) active_topic: Option<TopicId>,
    pub(crate) session: Option<Arc<TeachingSession>>,
    pub(crate) quiz: Option<Quiz>,
    pub(crate) lesson_epoch: u64,
    pub(crate) pending_lesson: Option<u64>,
    pub(crate) focus: FocusTimer,
    pub(crate) break_countdown: Option<BreakCountdown>,
    pub(crate) ticker_generation: u64,
    pub(crate) focus_ticker: Option<u64>,
    pub(crate) break_ticker: Option<u64>,
    pub(crate) error: Option<String>,
    pub(crate) reset_prompt: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StudyConfig::default())
    }
}

impl AppState {
    #[must_use]
    pub fn new(config: StudyConfig) -> Self {
        Self {
            config,
            phase: AppPhase::Idle,
            document_name: None,
            topics: TopicList::default(),
            active_topic: None,
            session: None,
            quiz: None,
            lesson_epoch: 0,
            pending_lesson: None,
            focus: FocusTimer::new(config.focus_secs),
            break_countdown: None,
            ticker_generation: 0,
            focus_ticker: None,
            break_ticker: None,
            error: None,
            reset_prompt: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> StudyConfig {
        self.config
    }

    #[must_use]
    pub fn phase(&self) -> AppPhase {
        self.phase
    }

    /// Name of the document being parsed or last parsed.
    #[must_use]
    pub fn document_name(&self) -> Option<&str> {
        self.document_name.as_deref()
    }

    #[must_use]
    pub fn topics(&self) -> &TopicList {
        &self.topics
    }

    #[must_use]
    pub fn active_topic_id(&self) -> Option<&TopicId> {
        self.active_topic.as_ref()
    }

    #[must_use]
    pub fn active_topic(&self) -> Option<&Topic> {
        self.active_topic.as_ref().and_then(|id| self.topics.get(id))
    }

    #[must_use]
    pub fn session(&self) -> Option<&TeachingSession> {
        self.session.as_deref()
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    /// A lesson has been requested and has not arrived yet.
    #[must_use]
    pub fn lesson_pending(&self) -> bool {
        self.pending_lesson.is_some()
    }

    #[must_use]
    pub fn focus(&self) -> &FocusTimer {
        &self.focus
    }

    #[must_use]
    pub fn break_countdown(&self) -> Option<&BreakCountdown> {
        self.break_countdown.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn reset_prompt(&self) -> Option<&'static str> {
        self.reset_prompt.then_some(RESET_PROMPT)
    }

    /// Focus time counts only while a loaded lesson is on screen and no break runs.
    #[must_use]
    pub fn focus_should_tick(&self) -> bool {
        self.phase == AppPhase::Teaching
            && self.session.is_some()
            && self.break_countdown.is_none()
    }

    #[must_use]
    pub fn break_should_tick(&self) -> bool {
        self.break_countdown.is_some_and(|countdown| !countdown.done())
    }

    /// Generation of the running focus ticker, if any.
    #[must_use]
    pub fn focus_ticker(&self) -> Option<u64> {
        self.focus_ticker
    }

    /// Generation of the running break ticker, if any.
    #[must_use]
    pub fn break_ticker(&self) -> Option<u64> {
        self.break_ticker
    }
}
