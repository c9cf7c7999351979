//! # StudyMate Core Library
//!
//! Core business logic for the StudyMate study companion. All operations
//! are available through a standalone CLI binary; any GUI is a thin skin
//! over this library.
//!
//! ## Architecture
//!
//! - **Shared Store**: an in-memory container for notes, goals and session
//!   history, constructed once at application start and handed by reference
//!   to every view
//! - **Timer**: a caller-ticked Pomodoro state machine cycling work and
//!   break intervals; the driver owns the one-second cadence
//! - **Stats**: pure derivations for the dashboard and progress views
//! - **Config**: TOML-based preferences under `~/.config/studymate/`
//!
//! ## Key Components
//!
//! - [`StudyStore`] and [`StoreCell`]: shared state and its access scoping
//! - [`PomodoroTimer`]: the countdown state machine
//! - [`NoteEditor`]: selection + draft workflow for the notes view
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod events;
pub mod goals;
pub mod notes;
pub mod notify;
pub mod stats;
pub mod store;
pub mod timer;

pub use config::Config;
pub use error::{ConfigError, CoreError, StoreError};
pub use events::Event;
pub use notes::{NoteDraft, NoteEditor};
pub use notify::{LogNotifier, Notifier};
pub use store::{Goal, Note, SessionRecord, StoreCell, StudyStore, User};
pub use timer::{format_clock, Durations, PomodoroTimer, SessionKind};
