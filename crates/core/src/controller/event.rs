use crate::model::{Document, TeachingSession, TopicDraft, TopicId};

/// Everything that can happen to the app: user actions, collaborator
/// replies and timer ticks.
#[derive(Debug, Clone)]
pub enum Event {
    Upload(Document),
    TopicsExtracted(Vec<TopicDraft>),
    ExtractionFailed(String),

    SelectTopic(TopicId),
    LessonGenerated {
        topic_id: TopicId,
        epoch: u64,
        session: TeachingSession,
    },
    LessonFailed {
        topic_id: TopicId,
        epoch: u64,
        reason: String,
    },

    ToggleComplete(TopicId),
    Back,
    Complete,

    RequestReset,
    ConfirmReset,
    CancelReset,

    Answer(String),
    AdvanceQuiz,
    RetakeQuiz,

    FocusTick { generation: u64 },
    BreakTick { generation: u64 },
    DismissBreak,

    DismissError,
}

/// Work the runtime must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ExtractTopics(Document),
    GenerateLesson {
        topic_id: TopicId,
        epoch: u64,
        title: String,
        context: String,
    },
    StartFocusTicker { generation: u64 },
    StopFocusTicker { generation: u64 },
    StartBreakTicker { generation: u64 },
    StopBreakTicker { generation: u64 },
}
