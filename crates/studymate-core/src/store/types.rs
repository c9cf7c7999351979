use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Note id: epoch milliseconds at creation, kept unique and monotonic
/// by the allocator in [`crate::notes`].
pub type NoteId = u64;

/// Goal id, same allocation scheme as [`NoteId`].
pub type GoalId = u64;

/// A study note. Categories are free text, not a normalized entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Day the note was created or last saved.
    pub date: NaiveDate,
}

/// A study goal. Goals are never deleted, only toggled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub deadline: NaiveDate,
}

/// Historical daily session count. Seed data only: timer activity is not
/// written back into this collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub date: NaiveDate,
    pub sessions: u32,
}

/// The signed-in user. There is no real authentication behind this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}
