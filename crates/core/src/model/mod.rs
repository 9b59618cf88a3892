mod document;
mod ids;
mod lesson;
mod topic;

pub use document::{Document, DocumentError, SUPPORTED_MIME_TYPES, mime_for_path};
pub use ids::TopicId;
pub use lesson::{LessonError, LessonExample, QuizQuestion, TeachingSession};
pub use topic::{Topic, TopicDraft, TopicError, TopicList};
