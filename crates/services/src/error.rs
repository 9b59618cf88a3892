//! Shared error types for the services crate.

use thiserror::Error;

use syllabus_core::model::{DocumentError, LessonError};

/// Transport-level failures talking to the generative model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TutorError {
    #[error("tutor is not configured")]
    Disabled,
    #[error("tutor returned an empty response")]
    EmptyResponse,
    #[error("tutor request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while extracting topics from a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractionError {
    #[error(transparent)]
    Tutor(#[from] TutorError),
    #[error("extracted topics are malformed: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Errors emitted while generating a lesson.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error(transparent)]
    Tutor(#[from] TutorError),
    #[error("generated lesson is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error(transparent)]
    InvalidLesson(#[from] LessonError),
}

/// Errors emitted by `StudyHandle`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RuntimeError {
    #[error("study runtime has stopped")]
    Closed,
}

/// Errors emitted while reading a syllabus from disk.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UploadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
