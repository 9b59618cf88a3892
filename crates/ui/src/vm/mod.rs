mod clock_vm;
mod dashboard_vm;
mod lesson_vm;
mod markdown_vm;
mod time_fmt;

#[cfg(test)]
pub(crate) mod fixtures;

pub use clock_vm::{BreakVm, FocusClockVm, map_break, map_focus_clock};
pub use dashboard_vm::{DashboardVm, TopicCardVm, map_dashboard};
pub use lesson_vm::{
    LessonVm, OptionVm, QuestionVm, QuizSummaryVm, QuizVm, map_lesson, map_quiz,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use time_fmt::duration_phrase;
