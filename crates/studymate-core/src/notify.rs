//! Session-completion notification boundary.
//!
//! The timer emits a completion event; the driver forwards it here when
//! sound is enabled. Fire-and-forget: no retry, no acknowledgment.

use crate::timer::SessionKind;

/// Receiver for session-completion signals.
pub trait Notifier {
    fn session_completed(&self, finished: SessionKind, completed_sessions: u32);
}

/// Notifier that announces completions on the log. A desktop shell would
/// plug a real sound/toast implementation in here instead.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn session_completed(&self, finished: SessionKind, completed_sessions: u32) {
        tracing::info!(
            finished = finished.label(),
            completed_sessions,
            "session completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recording(RefCell<Vec<(SessionKind, u32)>>);

    impl Notifier for Recording {
        fn session_completed(&self, finished: SessionKind, completed_sessions: u32) {
            self.0.borrow_mut().push((finished, completed_sessions));
        }
    }

    #[test]
    fn completion_is_forwarded_only_when_sound_enabled() {
        use crate::timer::{Durations, PomodoroTimer};
        use crate::Event;

        let notifier = Recording(RefCell::new(Vec::new()));
        let mut timer = PomodoroTimer::new(Durations::from_minutes(1, 1));
        timer.toggle_sound(); // off
        timer.toggle();
        for _ in 0..60 {
            if let Some(Event::SessionCompleted {
                finished,
                completed_sessions,
                ..
            }) = timer.tick()
            {
                if timer.sound_enabled() {
                    notifier.session_completed(finished, completed_sessions);
                }
            }
        }
        assert!(notifier.0.borrow().is_empty());

        timer.toggle_sound(); // back on
        timer.toggle();
        for _ in 0..60 {
            if let Some(Event::SessionCompleted {
                finished,
                completed_sessions,
                ..
            }) = timer.tick()
            {
                if timer.sound_enabled() {
                    notifier.session_completed(finished, completed_sessions);
                }
            }
        }
        assert_eq!(notifier.0.borrow().as_slice(), &[(SessionKind::Break, 1)]);
    }
}
