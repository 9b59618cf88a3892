use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson explanation is empty")]
    EmptyExplanation,

    #[error("quiz question {index} has no options")]
    NoOptions { index: usize },

    #[error("quiz question {index} has a correct answer that is not one of its options")]
    AnswerNotInOptions { index: usize },
}

//
// ─── QUIZ QUESTION ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    question: String,
    #[serde(default)]
    options: Vec<String>,
    correct_answer: String,
    #[serde(default)]
    explanation: String,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            correct_answer: correct_answer.into(),
            explanation: explanation.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Exact string comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }
}

//
// ─── TEACHING SESSION ──────────────────────────────────────────────────────────
//

/// A worked real-world example inside a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonExample {
    pub title: String,
    pub detail: String,
}

/// Generated lesson content for one topic. Immutable once built.
///
/// Sequence lengths are whatever the generator returned; nothing here assumes
/// the requested counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingSession {
    topic: String,
    explanation: String,
    #[serde(default)]
    analogies: Vec<String>,
    #[serde(default)]
    key_concepts: Vec<String>,
    #[serde(default)]
    examples: Vec<LessonExample>,
    #[serde(default)]
    quiz: Vec<QuizQuestion>,
}

impl TeachingSession {
    #[must_use]
    pub fn new(
        topic: impl Into<String>,
        explanation: impl Into<String>,
        analogies: Vec<String>,
        key_concepts: Vec<String>,
        examples: Vec<LessonExample>,
        quiz: Vec<QuizQuestion>,
    ) -> Self {
        Self {
            topic: topic.into(),
            explanation: explanation.into(),
            analogies,
            key_concepts,
            examples,
            quiz,
        }
    }

    /// Check the payload before it is shown.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` if the explanation is blank, or if a quiz question
    /// has no options or a correct answer outside its options.
    pub fn validate(self) -> Result<Self, LessonError> {
        if self.explanation.trim().is_empty() {
            return Err(LessonError::EmptyExplanation);
        }
        for (index, question) in self.quiz.iter().enumerate() {
            if question.options.is_empty() {
                return Err(LessonError::NoOptions { index });
            }
            if !question.options.iter().any(|option| question.is_correct(option)) {
                return Err(LessonError::AnswerNotInOptions { index });
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn analogies(&self) -> &[String] {
        &self.analogies
    }

    #[must_use]
    pub fn key_concepts(&self) -> &[String] {
        &self.key_concepts
    }

    #[must_use]
    pub fn examples(&self) -> &[LessonExample] {
        &self.examples
    }

    #[must_use]
    pub fn quiz(&self) -> &[QuizQuestion] {
        &self.quiz
    }
}
