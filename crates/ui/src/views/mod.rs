mod dashboard;
mod lesson;
mod overlays;
mod parsing;
mod screen;
mod state;
mod upload;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use lesson::{LessonView, QuizPanel};
pub use overlays::{BreakOverlay, ErrorBanner, FocusClock, ResetConfirm};
pub use parsing::{LessonLoadingView, ParsingView};
pub use screen::{StudyScreen, StudyShell};
pub use state::{ViewError, ViewState};
pub use upload::UploadView;

use services::RuntimeError;
use tracing::warn;

/// Log a command the runtime could not accept. The view keeps showing the
/// last published state.
pub(crate) fn report(result: Result<(), RuntimeError>) {
    if let Err(err) = result {
        warn!(%err, "ui command dropped");
    }
}
