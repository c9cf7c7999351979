use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use studymate_core::{
    format_clock, Config, Event, LogNotifier, Notifier, PomodoroTimer, SessionKind,
};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Print the initial timer state as JSON
    Status,
    /// Run a live Pomodoro session in the terminal
    Run {
        /// Stop after this many completed work sessions
        #[arg(long, default_value_t = 1)]
        sessions: u32,
        /// Override the configured work duration, in minutes
        #[arg(long)]
        work_minutes: Option<u32>,
        /// Override the configured break duration, in minutes
        #[arg(long)]
        break_minutes: Option<u32>,
        /// Suppress the completion notification
        #[arg(long)]
        no_sound: bool,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();

    match action {
        TimerAction::Status => {
            let timer = PomodoroTimer::new(config.durations());
            println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
        }
        TimerAction::Run {
            sessions,
            work_minutes,
            break_minutes,
            no_sound,
        } => {
            if let Some(min) = work_minutes {
                config.timer.work_minutes = min;
            }
            if let Some(min) = break_minutes {
                config.timer.short_break_minutes = min;
            }
            let mut timer = PomodoroTimer::new(config.durations());
            if no_sound && timer.sound_enabled() {
                timer.toggle_sound();
            }
            run_live(&mut timer, sessions)?;
        }
    }
    Ok(())
}

/// Drive the state machine with a real one-second cadence until `target`
/// work sessions have completed, running the breaks in between.
///
/// The interval is created when the countdown starts and dropped on every
/// transition out of the running state, so no stale tick can fire into an
/// idle machine.
fn run_live(timer: &mut PomodoroTimer, target: u32) -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let notifier = LogNotifier;

    rt.block_on(async {
        while timer.completed_sessions() < target {
            let started = timer.toggle();
            println!("{}", serde_json::to_string_pretty(&started)?);

            let mut ticker = tokio::time::interval(Duration::from_secs(1));
            // The first tick of a fresh interval fires immediately.
            ticker.tick().await;

            let completion = loop {
                ticker.tick().await;
                match timer.tick() {
                    Some(event) => break event,
                    None => render_countdown(timer),
                }
            };
            drop(ticker);

            println!();
            println!("{}", serde_json::to_string_pretty(&completion)?);
            if let Event::SessionCompleted {
                finished,
                completed_sessions,
                ..
            } = completion
            {
                if timer.sound_enabled() {
                    notifier.session_completed(finished, completed_sessions);
                }
                // Stop once the target is met; skip the trailing break.
                if finished == SessionKind::Work && completed_sessions >= target {
                    break;
                }
            }
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    })?;

    println!(
        "done: {} session(s) completed",
        timer.completed_sessions()
    );
    Ok(())
}

fn render_countdown(timer: &PomodoroTimer) {
    print!(
        "\r{} {}  ",
        timer.kind().label(),
        format_clock(timer.remaining_secs())
    );
    let _ = std::io::stdout().flush();
}
