use clap::Subcommand;
use studymate_core::{stats, Config, StoreCell};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Daily session chart data
    Daily,
    /// Goals and study-time summary
    Summary,
}

pub fn run(action: StatsAction, store: &StoreCell) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Daily => {
            let chart = store.with(|s| stats::daily_chart(s.sessions()))?;
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }
        StatsAction::Summary => {
            let config = Config::load_or_default();
            let (summary, total_sessions) = store.with(|s| {
                let summary = stats::goal_summary(s.goals());
                let total: u32 = s.sessions().iter().map(|r| r.sessions).sum();
                (summary, total)
            })?;
            let report = serde_json::json!({
                "goals": summary,
                "total_sessions": total_sessions,
                "focus_time": stats::focus_time(total_sessions).to_string(),
                "daily_session_goal": config.timer.daily_session_goal,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
