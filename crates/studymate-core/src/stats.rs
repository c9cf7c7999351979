//! Derived statistics for the dashboard and progress views.
//!
//! Pure functions over store snapshots and the timer's session counter.
//! Chart drawing is presentation; this module only shapes the data.

use serde::Serialize;
use std::fmt;

use crate::store::{Goal, SessionRecord};

/// Minutes of focus per completed session.
const SESSION_MINUTES: u32 = 25;

/// One point of the daily-sessions chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    /// Short human label, e.g. "Jan 15".
    pub label: String,
    pub sessions: u32,
    /// Approximate study hours, one decimal place.
    pub hours: f64,
}

/// Chart data for the daily study-sessions line: one point per session
/// record, in store order.
pub fn daily_chart(sessions: &[SessionRecord]) -> Vec<DailyPoint> {
    sessions
        .iter()
        .map(|record| DailyPoint {
            label: record.date.format("%b %-d").to_string(),
            sessions: record.sessions,
            hours: (f64::from(record.sessions) * 0.42 * 10.0).round() / 10.0,
        })
        .collect()
}

/// Goal completion overview for the progress header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalSummary {
    pub completed: usize,
    pub total: usize,
    /// Percent in 0..=100; 0 when there are no goals.
    pub completion_rate: f64,
}

pub fn goal_summary(goals: &[Goal]) -> GoalSummary {
    let total = goals.len();
    let completed = goals.iter().filter(|g| g.completed).count();
    let completion_rate = if total > 0 {
        completed as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    GoalSummary {
        completed,
        total,
        completion_rate,
    }
}

/// Accumulated focus time, rendered as `"Xh Ym"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusTime {
    pub hours: u32,
    pub minutes: u32,
}

impl fmt::Display for FocusTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Focus time earned by `completed_sessions` 25-minute sessions.
pub fn focus_time(completed_sessions: u32) -> FocusTime {
    let total_minutes = completed_sessions.saturating_mul(SESSION_MINUTES);
    FocusTime {
        hours: total_minutes / 60,
        minutes: total_minutes % 60,
    }
}

/// Progress toward the configured daily session target, capped at 100.
pub fn daily_goal_pct(completed_sessions: u32, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (f64::from(completed_sessions) / f64::from(target) * 100.0).min(100.0)
}

/// Sessions still needed to reach the daily target, floored at zero.
pub fn sessions_to_goal(completed_sessions: u32, target: u32) -> u32 {
    target.saturating_sub(completed_sessions)
}
