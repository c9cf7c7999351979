use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::SessionKind;

/// Every timer state change produces an Event. The UI polls for events;
/// the notification boundary reacts to completions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        kind: SessionKind,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// An interval ran down to zero. `completed_sessions` counts finished
    /// work intervals only.
    SessionCompleted {
        finished: SessionKind,
        next: SessionKind,
        completed_sessions: u32,
        at: DateTime<Utc>,
    },
    /// Manual jump to the given interval kind.
    KindSwitched {
        kind: SessionKind,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        kind: SessionKind,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        kind: SessionKind,
        running: bool,
        remaining_secs: u32,
        total_secs: u32,
        progress: f64,
        completed_sessions: u32,
        sound_enabled: bool,
        at: DateTime<Utc>,
    },
}
