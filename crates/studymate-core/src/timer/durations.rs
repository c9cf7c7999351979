use serde::{Deserialize, Serialize};

/// The two interval kinds cycled by the Pomodoro timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Work,
    Break,
}

impl SessionKind {
    /// The kind the cycle moves to when this one finishes.
    pub fn next(self) -> Self {
        match self {
            SessionKind::Work => SessionKind::Break,
            SessionKind::Break => SessionKind::Work,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionKind::Work => "work",
            SessionKind::Break => "break",
        }
    }
}

/// Interval lengths for one timer instance, fixed at construction.
///
/// A long-break length exists in configuration but is not part of the
/// cycle; see `Config::durations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub work_secs: u32,
    pub break_secs: u32,
}

impl Durations {
    pub fn from_minutes(work_min: u32, break_min: u32) -> Self {
        Self {
            work_secs: work_min.saturating_mul(60),
            break_secs: break_min.saturating_mul(60),
        }
    }

    pub fn for_kind(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Work => self.work_secs,
            SessionKind::Break => self.break_secs,
        }
    }
}

impl Default for Durations {
    /// 25-minute work intervals, 5-minute breaks.
    fn default() -> Self {
        Self::from_minutes(25, 5)
    }
}

/// Render a second count as `MM:SS`, both fields zero-padded.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations() {
        let d = Durations::default();
        assert_eq!(d.work_secs, 1500);
        assert_eq!(d.break_secs, 300);
    }

    #[test]
    fn format_clock_zero_pads() {
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn kind_cycle() {
        assert_eq!(SessionKind::Work.next(), SessionKind::Break);
        assert_eq!(SessionKind::Break.next(), SessionKind::Work);
    }
}
