//! Pomodoro timer state machine.
//!
//! The timer is a caller-ticked state machine. It holds no internal thread
//! and schedules nothing - the driver owns the one-second cadence and must
//! drop its tick source on every transition out of the running state.
//!
//! ## State transitions
//!
//! ```text
//! Idle-Work <-> Running-Work --(remaining hits 0)--> Idle-Break
//! Idle-Break <-> Running-Break --(remaining hits 0)--> Idle-Work
//! ```
//!
//! Completing a work interval increments the session counter; completing a
//! break does not. Completed sessions live only in this machine - they are
//! not written back into the shared store's session history.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::durations::{Durations, SessionKind};
use crate::events::Event;

/// Core countdown engine for one timer page visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroTimer {
    durations: Durations,
    kind: SessionKind,
    running: bool,
    /// Remaining time in seconds for the current interval.
    remaining_secs: u32,
    /// Work intervals finished since construction.
    completed_sessions: u32,
    sound_enabled: bool,
}

impl PomodoroTimer {
    /// New timer: idle at the start of a work interval.
    pub fn new(durations: Durations) -> Self {
        Self {
            durations,
            kind: SessionKind::Work,
            running: false,
            remaining_secs: durations.work_secs,
            completed_sessions: 0,
            sound_enabled: true,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Full length of the current interval.
    pub fn total_secs(&self) -> u32 {
        self.durations.for_kind(self.kind)
    }

    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// 0.0 .. 1.0 progress within the current interval.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        f64::from(total - self.remaining_secs) / f64::from(total)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            kind: self.kind,
            running: self.running,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            progress: self.progress(),
            completed_sessions: self.completed_sessions,
            sound_enabled: self.sound_enabled,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start/pause toggle. Pausing preserves the remaining time exactly.
    pub fn toggle(&mut self) -> Event {
        if self.running {
            self.running = false;
            Event::TimerPaused {
                remaining_secs: self.remaining_secs,
                at: Utc::now(),
            }
        } else {
            self.running = true;
            Event::TimerStarted {
                kind: self.kind,
                remaining_secs: self.remaining_secs,
                at: Utc::now(),
            }
        }
    }

    /// Jump to the given interval kind: stops the countdown and reloads
    /// the kind's full duration, from any state.
    pub fn switch_to(&mut self, kind: SessionKind) -> Event {
        self.running = false;
        self.kind = kind;
        self.remaining_secs = self.durations.for_kind(kind);
        Event::KindSwitched {
            kind,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Stop and reload the current interval's full duration.
    pub fn reset(&mut self) -> Event {
        self.running = false;
        self.remaining_secs = self.durations.for_kind(self.kind);
        Event::TimerReset {
            kind: self.kind,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    /// Advance the countdown by one second. Only the running states tick.
    ///
    /// Returns the completion event when the interval finishes: the machine
    /// stops, swaps to the other kind and reloads that kind's duration. The
    /// caller fires the notification boundary, guarded by `sound_enabled`.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        let finished = self.kind;
        if finished == SessionKind::Work {
            self.completed_sessions += 1;
        }
        self.running = false;
        self.kind = finished.next();
        self.remaining_secs = self.durations.for_kind(self.kind);
        tracing::debug!(
            finished = finished.label(),
            completed_sessions = self.completed_sessions,
            "interval completed"
        );
        Some(Event::SessionCompleted {
            finished,
            next: self.kind,
            completed_sessions: self.completed_sessions,
            at: Utc::now(),
        })
    }
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}
