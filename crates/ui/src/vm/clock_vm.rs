use syllabus_core::{AppPhase, AppState};

use crate::vm::time_fmt::duration_phrase;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusClockVm {
    pub display: String,
    pub paused: bool,
}

/// The clock shows while a lesson is on screen.
#[must_use]
pub fn map_focus_clock(state: &AppState) -> Option<FocusClockVm> {
    if state.phase() != AppPhase::Teaching || state.session().is_none() {
        return None;
    }
    Some(FocusClockVm {
        display: state.focus().display(),
        paused: state.focus().break_active(),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakVm {
    pub display: String,
    pub message: String,
    pub dismiss_label: &'static str,
    pub done: bool,
}

#[must_use]
pub fn map_break(state: &AppState) -> Option<BreakVm> {
    let countdown = state.break_countdown()?;
    let focused = duration_phrase(state.config().focus_secs);
    Some(BreakVm {
        display: countdown.display(),
        message: format!(
            "You've been focused for {focused}. Let your brain rest for a moment to better absorb what you've learned."
        ),
        dismiss_label: countdown.dismiss_label(),
        done: countdown.done(),
    })
}
