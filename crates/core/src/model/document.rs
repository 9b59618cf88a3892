use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("document is empty")]
    Empty,

    #[error("unsupported document type: {0}")]
    Unsupported(String),
}

/// Mime types the topic extractor accepts.
pub const SUPPORTED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "text/plain",
    "text/markdown",
    "image/png",
    "image/jpeg",
    "image/webp",
    "image/gif",
    "image/heic",
];

/// Guess a mime type from a file extension.
#[must_use]
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "pdf" => "application/pdf",
        "txt" | "text" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        _ => return None,
    };
    Some(mime)
}

/// An uploaded syllabus: raw bytes plus the mime type they were sent with.
#[derive(Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl Document {
    /// # Errors
    ///
    /// Returns `DocumentError::Empty` for a zero-length payload and
    /// `DocumentError::Unsupported` for a mime type outside
    /// [`SUPPORTED_MIME_TYPES`].
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, DocumentError> {
        let mime_type = mime_type.into().trim().to_ascii_lowercase();
        if !SUPPORTED_MIME_TYPES.contains(&mime_type.as_str()) {
            return Err(DocumentError::Unsupported(mime_type));
        }
        if bytes.is_empty() {
            return Err(DocumentError::Empty);
        }
        Ok(Self {
            name: name.into(),
            mime_type,
            bytes,
        })
    }

    /// Build a document for a file, deriving the mime type from its extension.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError` when the extension is unknown or the payload is empty.
    pub fn for_path(path: &Path, bytes: Vec<u8>) -> Result<Self, DocumentError> {
        let mime = mime_for_path(path).ok_or_else(|| {
            DocumentError::Unsupported(
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or_default()
                    .to_string(),
            )
        })?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        Self::new(name, mime, bytes)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
