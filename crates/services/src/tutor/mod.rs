//! The generative-model collaborator that extracts topics and writes lessons.

mod gemini;
pub mod prompts;

use async_trait::async_trait;

use syllabus_core::model::{Document, TeachingSession, TopicDraft};

use crate::error::{ExtractionError, GenerationError};

pub use gemini::{
    GeminiTutor, GenerateRequest, TutorConfig, extraction_request, lesson_request, parse_lesson,
    parse_topics,
};

#[async_trait]
pub trait Tutor: Send + Sync {
    /// Pull a flat topic list out of a syllabus document.
    async fn extract_topics(&self, document: &Document) -> Result<Vec<TopicDraft>, ExtractionError>;

    /// Write a lesson for one topic. `context` lists the other syllabus topics.
    async fn generate_lesson(
        &self,
        topic_title: &str,
        context: &str,
    ) -> Result<TeachingSession, GenerationError>;
}
