mod durations;
mod engine;

pub use durations::{format_clock, Durations, SessionKind};
pub use engine::PomodoroTimer;
