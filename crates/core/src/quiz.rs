//! Linear mastery-check quiz: one question at a time, first answer sticks.

use crate::model::QuizQuestion;

/// Result of picking an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// The current question was already answered (or the quiz is over).
    Ignored,
}

/// Result of moving past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Next { index: usize },
    Summary,
    /// The current question has not been answered yet.
    Ignored,
}

/// Presentation state of a single option once the question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    Correct,
    Incorrect,
    Dimmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    selected_option: Option<String>,
    is_answered: bool,
    score: usize,
    show_summary: bool,
}

impl Quiz {
    /// An empty quiz opens directly on its summary.
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let show_summary = questions.is_empty();
        Self {
            questions,
            current_index: 0,
            selected_option: None,
            is_answered: false,
            score: 0,
            show_summary,
        }
    }

    /// Record the first answer for the current question.
    pub fn answer(&mut self, option: &str) -> AnswerOutcome {
        if self.is_answered || self.show_summary {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return AnswerOutcome::Ignored;
        };
        let correct = question.is_correct(option);
        self.selected_option = Some(option.to_string());
        self.is_answered = true;
        if correct {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }

    /// Move to the next question, or to the summary after the last one.
    pub fn advance(&mut self) -> QuizStep {
        if !self.is_answered || self.show_summary {
            return QuizStep::Ignored;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected_option = None;
            self.is_answered = false;
            QuizStep::Next {
                index: self.current_index,
            }
        } else {
            self.show_summary = true;
            QuizStep::Summary
        }
    }

    /// Restart from the first question. An empty quiz stays on its summary.
    pub fn retake(&mut self) {
        self.current_index = 0;
        self.selected_option = None;
        self.is_answered = false;
        self.score = 0;
        self.show_summary = self.questions.is_empty();
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.show_summary {
            return None;
        }
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.is_answered
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn show_summary(&self) -> bool {
        self.show_summary
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn option_state(&self, option: &str) -> OptionState {
        let Some(question) = self.current_question() else {
            return OptionState::Neutral;
        };
        if !self.is_answered {
            return OptionState::Neutral;
        }
        if question.is_correct(option) {
            OptionState::Correct
        } else if self.selected_option() == Some(option) {
            OptionState::Incorrect
        } else {
            OptionState::Dimmed
        }
    }

    /// "3 out of 3" style summary line.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("{} out of {}", self.score, self.total())
    }
}
