#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod model;
pub mod quiz;
pub mod timer;

pub use config::StudyConfig;
pub use controller::{AppPhase, AppState, Effect, Event, Transition, transition};
