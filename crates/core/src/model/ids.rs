use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a syllabus topic.
///
/// Ids are chosen by the topic extractor, so they are opaque strings rather
/// than numeric keys.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    /// Creates a new `TopicId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fallback id for the topic at `position` (0-based) in an extracted list.
    #[must_use]
    pub fn positional(position: usize) -> Self {
        Self(format!("topic-{}", position + 1))
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TopicId({:?})", self.0)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TopicId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_id_display() {
        let id = TopicId::new("t1");
        assert_eq!(id.to_string(), "t1");
        assert_eq!(format!("{id:?}"), "TopicId(\"t1\")");
    }

    #[test]
    fn test_topic_id_positional_is_one_based() {
        assert_eq!(TopicId::positional(0).as_str(), "topic-1");
        assert_eq!(TopicId::positional(4).as_str(), "topic-5");
    }

    #[test]
    fn test_topic_id_blank() {
        assert!(TopicId::new("  ").is_blank());
        assert!(!TopicId::new("a").is_blank());
    }

    #[test]
    fn test_topic_id_serde_is_plain_string() {
        let id: TopicId = serde_json::from_str("\"intro\"").unwrap();
        assert_eq!(id, TopicId::new("intro"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"intro\"");
    }
}
