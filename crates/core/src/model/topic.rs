use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::TopicId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("no topics found in document")]
    NoTopics,

    #[error("unknown topic: {0}")]
    UnknownTopic(TopicId),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// A topic as returned by the extractor, before it enters the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDraft {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl TopicDraft {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// One learning unit of the syllabus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    id: TopicId,
    title: String,
    description: String,
    completed: bool,
}

impl Topic {
    #[must_use]
    pub fn new(id: TopicId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }
}

//
// ─── STORE ─────────────────────────────────────────────────────────────────────
//

/// Ordered topic list with completion flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicList {
    topics: Vec<Topic>,
}

impl TopicList {
    /// Build the store from extracted drafts. Every topic starts incomplete.
    ///
    /// Blank or repeated ids are replaced by a positional id so that ids stay
    /// unique within the list. Drafts without a title are skipped.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::NoTopics` if no draft carries a title.
    pub fn from_drafts(drafts: Vec<TopicDraft>) -> Result<Self, TopicError> {
        let mut seen = HashSet::new();
        let mut topics = Vec::with_capacity(drafts.len());

        for (position, draft) in drafts.into_iter().enumerate() {
            let title = draft.title.trim();
            if title.is_empty() {
                continue;
            }
            let mut id = TopicId::new(draft.id.trim());
            if id.is_blank() || seen.contains(&id) {
                id = TopicId::positional(position);
            }
            // A positional id may itself collide with an extractor-supplied one.
            let mut suffix = 1;
            while seen.contains(&id) {
                id = TopicId::new(format!("topic-{}-{suffix}", position + 1));
                suffix += 1;
            }
            seen.insert(id.clone());
            topics.push(Topic::new(id, title, draft.description.trim()));
        }

        if topics.is_empty() {
            return Err(TopicError::NoTopics);
        }
        Ok(Self { topics })
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|topic| &topic.id == id)
    }

    /// Flip the completion flag of a topic.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::UnknownTopic` if the id is not in the list.
    pub fn toggle_complete(&mut self, id: &TopicId) -> Result<bool, TopicError> {
        let topic = self.get_mut(id)?;
        topic.completed = !topic.completed;
        Ok(topic.completed)
    }

    /// Force the completion flag to `true`. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::UnknownTopic` if the id is not in the list.
    pub fn mark_complete(&mut self, id: &TopicId) -> Result<(), TopicError> {
        self.get_mut(id)?.completed = true;
        Ok(())
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.topics.iter().filter(|topic| topic.completed).count()
    }

    /// Completion rounded to the nearest whole percent; 0 for an empty list.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = self.topics.len();
        if total == 0 {
            return 0;
        }
        let completed = self.completed_count();
        let percent = (completed * 100 + total / 2) / total;
        u8::try_from(percent).unwrap_or(100)
    }

    /// Titles of every topic joined with `", "`, sent as lesson context.
    #[must_use]
    pub fn context_summary(&self) -> String {
        self.topics
            .iter()
            .map(Topic::title)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn get_mut(&mut self, id: &TopicId) -> Result<&mut Topic, TopicError> {
        self.topics
            .iter_mut()
            .find(|topic| &topic.id == id)
            .ok_or_else(|| TopicError::UnknownTopic(id.clone()))
    }
}
