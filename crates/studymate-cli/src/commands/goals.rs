use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use studymate_core::{goals, StoreCell};

#[derive(Subcommand)]
pub enum GoalsAction {
    /// List all goals
    List,
    /// Add a goal
    Add {
        /// Goal title
        title: String,
        /// Deadline (YYYY-MM-DD); defaults to one week from today
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Toggle a goal's completion by id
    Toggle { id: u64 },
}

pub fn run(action: GoalsAction, store: &StoreCell) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GoalsAction::List => {
            let goals = store.with(|s| s.goals().to_vec())?;
            println!("{}", serde_json::to_string_pretty(&goals)?);
        }
        GoalsAction::Add { title, deadline } => {
            let deadline = deadline
                .map(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d"))
                .transpose()?;
            let today = Utc::now().date_naive();
            let added = store.with(|s| {
                let id = goals::add(s, &title, deadline, today)?;
                s.goals().iter().find(|g| g.id == id).cloned()
            })?;
            match added {
                Some(goal) => println!("{}", serde_json::to_string_pretty(&goal)?),
                None => eprintln!("goal discarded: title is required"),
            }
        }
        GoalsAction::Toggle { id } => {
            let toggled = store.with(|s| {
                if goals::toggle(s, id) {
                    s.goals().iter().find(|g| g.id == id).cloned()
                } else {
                    None
                }
            })?;
            match toggled {
                Some(goal) => println!("{}", serde_json::to_string_pretty(&goal)?),
                None => {
                    eprintln!("no goal with id {id}");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
