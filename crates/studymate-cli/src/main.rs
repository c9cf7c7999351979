use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use studymate_core::{StoreCell, StudyStore};

mod commands;

#[derive(Parser)]
#[command(name = "studymate-cli", version, about = "StudyMate CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pomodoro timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Note management
    Notes {
        #[command(subcommand)]
        action: commands::notes::NotesAction,
    },
    /// Goal tracking
    Goals {
        #[command(subcommand)]
        action: commands::goals::GoalsAction,
    },
    /// Study statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// The process-wide study store. Initialized once in `main`, before any
/// command runs.
static STORE: StoreCell = StoreCell::new();

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = STORE.init(StudyStore::seeded()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Notes { action } => commands::notes::run(action, &STORE),
        Commands::Goals { action } => commands::goals::run(action, &STORE),
        Commands::Stats { action } => commands::stats::run(action, &STORE),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "studymate-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
