use services::UploadError;
use syllabus_core::model::DocumentError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unreadable,
    Unsupported,
    Empty,
    Disconnected,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unreadable => "That file could not be opened. Check the path and try again.",
            Self::Unsupported => "That file type is not supported. Try a PDF, image, or text file.",
            Self::Empty => "That file is empty.",
            Self::Disconnected => "Something went wrong. Please restart the app.",
        }
    }
}

impl From<&UploadError> for ViewError {
    fn from(err: &UploadError) -> Self {
        match err {
            UploadError::Io { .. } => Self::Unreadable,
            UploadError::Document(DocumentError::Empty) => Self::Empty,
            UploadError::Document(_) => Self::Unsupported,
            _ => Self::Disconnected,
        }
    }
}

/// Progress of a local action started from a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Error(ViewError),
}
