use syllabus_core::model::{LessonExample, TeachingSession};
use syllabus_core::quiz::{OptionState, Quiz};

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub topic: String,
    pub explanation_html: String,
    pub analogies: Vec<String>,
    pub key_concepts: Vec<String>,
    pub examples: Vec<LessonExample>,
    pub quiz: QuizVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizVm {
    Question(QuestionVm),
    Summary(QuizSummaryVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub dots: Vec<&'static str>,
    pub answered: bool,
    pub explanation: Option<String>,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSummaryVm {
    pub score_line: String,
    pub xp_label: String,
}

fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Neutral => "quiz-option",
        OptionState::Correct => "quiz-option quiz-option--correct",
        OptionState::Incorrect => "quiz-option quiz-option--incorrect",
        OptionState::Dimmed => "quiz-option quiz-option--dimmed",
    }
}

/// Dots before the current question are done, the current one is active.
fn progress_dots(quiz: &Quiz) -> Vec<&'static str> {
    let current = quiz.current_index();
    (0..quiz.total())
        .map(|i| match i.cmp(&current) {
            std::cmp::Ordering::Less => "quiz-dot quiz-dot--done",
            std::cmp::Ordering::Equal => "quiz-dot quiz-dot--current",
            std::cmp::Ordering::Greater => "quiz-dot",
        })
        .collect()
}

#[must_use]
pub fn map_quiz(quiz: &Quiz) -> QuizVm {
    let Some(question) = quiz.current_question() else {
        return QuizVm::Summary(QuizSummaryVm {
            score_line: format!("You got {} correctly.", quiz.summary_line()),
            xp_label: format!("+{} XP", quiz.score() * 10),
        });
    };
    let answered = quiz.is_answered();
    QuizVm::Question(QuestionVm {
        prompt: question.question().to_string(),
        options: question
            .options()
            .iter()
            .map(|option| OptionVm {
                label: option.clone(),
                class: option_class(quiz.option_state(option)),
            })
            .collect(),
        dots: progress_dots(quiz),
        answered,
        explanation: answered.then(|| question.explanation().to_string()),
        next_label: if quiz.is_last_question() {
            "See Results"
        } else {
            "Next Challenge"
        },
    })
}

#[must_use]
pub fn map_lesson(session: &TeachingSession, quiz: &Quiz) -> LessonVm {
    LessonVm {
        topic: session.topic().to_string(),
        explanation_html: markdown_to_html(session.explanation()),
        analogies: session.analogies().to_vec(),
        key_concepts: session.key_concepts().to_vec(),
        examples: session.examples().to_vec(),
        quiz: map_quiz(quiz),
    }
}

#[cfg(test)]
mod tests {
    use syllabus_core::model::QuizQuestion;

    use super::*;
    use crate::vm::fixtures::lesson;

    fn question(vm: QuizVm) -> QuestionVm {
        match vm {
            QuizVm::Question(question) => question,
            QuizVm::Summary(_) => panic!("expected a question"),
        }
    }

    #[test]
    fn unanswered_question_is_neutral() {
        let session = lesson("Photosynthesis");
        let quiz = Quiz::new(session.quiz().to_vec());
        let vm = map_lesson(&session, &quiz);
        assert!(vm.explanation_html.contains("<strong>chefs</strong>"));
        let q = question(vm.quiz);
        assert_eq!(q.prompt, "What feeds a plant?");
        assert!(q.options.iter().all(|o| o.class == "quiz-option"));
        assert_eq!(q.dots, ["quiz-dot quiz-dot--current", "quiz-dot"]);
        assert_eq!(q.explanation, None);
        assert_eq!(q.next_label, "Next Challenge");
    }

    #[test]
    fn wrong_answer_marks_both_options() {
        let mut quiz = Quiz::new(lesson("Photosynthesis").quiz().to_vec());
        quiz.answer("Rocks");
        let q = question(map_quiz(&quiz));
        assert_eq!(q.options[0].class, "quiz-option quiz-option--correct");
        assert_eq!(q.options[1].class, "quiz-option quiz-option--incorrect");
        assert_eq!(q.explanation.as_deref(), Some("Light is the fuel."));
    }

    #[test]
    fn last_question_leads_to_results() {
        let mut quiz = Quiz::new(lesson("Photosynthesis").quiz().to_vec());
        quiz.answer("Light");
        quiz.advance();
        let q = question(map_quiz(&quiz));
        assert_eq!(q.dots, ["quiz-dot quiz-dot--done", "quiz-dot quiz-dot--current"]);
        assert_eq!(q.next_label, "See Results");
    }

    #[test]
    fn unselected_options_dim_after_answer() {
        let mut quiz = Quiz::new(vec![QuizQuestion::new(
            "Pick",
            vec!["a".into(), "b".into(), "c".into()],
            "a",
            "",
        )]);
        quiz.answer("b");
        let q = question(map_quiz(&quiz));
        assert_eq!(q.options[2].class, "quiz-option quiz-option--dimmed");
    }

    #[test]
    fn summary_reports_score_and_xp() {
        let mut quiz = Quiz::new(lesson("Photosynthesis").quiz().to_vec());
        quiz.answer("Light");
        quiz.advance();
        quiz.answer("Roots");
        quiz.advance();
        match map_quiz(&quiz) {
            QuizVm::Summary(summary) => {
                assert_eq!(summary.score_line, "You got 1 out of 2 correctly.");
                assert_eq!(summary.xp_label, "+10 XP");
            }
            QuizVm::Question(_) => panic!("expected the summary"),
        }
    }
}
