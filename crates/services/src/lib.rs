#![forbid(unsafe_code)]

pub mod error;
pub mod runtime;
pub mod tutor;

pub use error::{ExtractionError, GenerationError, RuntimeError, TutorError, UploadError};
pub use runtime::{StudyHandle, StudyRuntime, TICK_PERIOD};
pub use tutor::{GeminiTutor, Tutor, TutorConfig};
