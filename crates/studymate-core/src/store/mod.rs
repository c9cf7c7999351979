//! Shared study state store.
//!
//! `StudyStore` is the single source of truth for notes, goals and session
//! history, constructed once at application start and shared by reference
//! with every consuming view. It performs no validation, deduplication or
//! sorting: callers build the replacement collection themselves and the
//! last write wins.

mod cell;
mod types;

pub use cell::StoreCell;
pub use types::{Goal, GoalId, Note, NoteId, SessionRecord, User};

use chrono::NaiveDate;

/// In-memory holder of the four shared collections.
#[derive(Debug, Clone, Default)]
pub struct StudyStore {
    user: Option<User>,
    notes: Vec<Note>,
    goals: Vec<Goal>,
    sessions: Vec<SessionRecord>,
}

impl StudyStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the starter content every fresh install ships.
    pub fn seeded() -> Self {
        Self {
            user: None,
            notes: vec![
                Note {
                    id: 1,
                    title: "React Hooks".into(),
                    content: "useState, useEffect, useContext...".into(),
                    category: "Programming".into(),
                    date: ymd(2024, 1, 15),
                },
                Note {
                    id: 2,
                    title: "Math Formulas".into(),
                    content: "Quadratic formula: x = (-b ± √(b²-4ac)) / 2a".into(),
                    category: "Mathematics".into(),
                    date: ymd(2024, 1, 14),
                },
            ],
            goals: vec![
                Goal {
                    id: 1,
                    title: "Complete React Course".into(),
                    completed: false,
                    deadline: ymd(2024, 2, 1),
                },
                Goal {
                    id: 2,
                    title: "Study 25 hours this week".into(),
                    completed: true,
                    deadline: ymd(2024, 1, 21),
                },
            ],
            sessions: vec![
                SessionRecord { date: ymd(2024, 1, 15), sessions: 8 },
                SessionRecord { date: ymd(2024, 1, 14), sessions: 6 },
                SessionRecord { date: ymd(2024, 1, 13), sessions: 4 },
                SessionRecord { date: ymd(2024, 1, 12), sessions: 7 },
                SessionRecord { date: ymd(2024, 1, 11), sessions: 5 },
            ],
        }
    }

    // ── Notes ────────────────────────────────────────────────────────

    /// Current notes snapshot, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Full-collection replace. No partial-update API exists; callers
    /// filter/map/prepend and hand back the whole sequence.
    pub fn replace_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    // ── Goals ────────────────────────────────────────────────────────

    /// Current goals snapshot, append-order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn replace_goals(&mut self, goals: Vec<Goal>) {
        self.goals = goals;
    }

    // ── Session history ──────────────────────────────────────────────

    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn replace_sessions(&mut self, sessions: Vec<SessionRecord>) {
        self.sessions = sessions;
    }

    // ── User ─────────────────────────────────────────────────────────

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Milliseconds since the Unix epoch. Record ids derive from this.
pub(crate) fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
