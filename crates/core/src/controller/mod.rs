//! Application state machine.
//!
//! `transition` is a pure function from `(state, event)` to the next state
//! plus a list of effects. A runtime feeds it events and executes the effects.

mod event;
mod state;
mod transition;

pub use event::{Effect, Event};
pub use state::{
    AppPhase, AppState, EXTRACTION_FAILED_MESSAGE, GENERATION_FAILED_MESSAGE, RESET_PROMPT,
};
pub use transition::{Transition, transition};
