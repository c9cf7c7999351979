use chrono::Utc;
use clap::Subcommand;
use studymate_core::{notes, NoteEditor, StoreCell};

#[derive(Subcommand)]
pub enum NotesAction {
    /// List all notes, newest first
    List,
    /// Search notes by title, content or category
    Search {
        /// Search term (case-insensitive)
        term: String,
    },
    /// Create a note
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "")]
        category: String,
    },
    /// Delete a note by id
    Delete { id: u64 },
    /// List distinct categories
    Categories,
}

pub fn run(action: NotesAction, store: &StoreCell) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        NotesAction::List => {
            let notes = store.with(|s| s.notes().to_vec())?;
            println!("{}", serde_json::to_string_pretty(&notes)?);
        }
        NotesAction::Search { term } => {
            let notes = store.with(|s| s.notes().to_vec())?;
            let hits: Vec<_> = notes::search(&notes, &term).into_iter().cloned().collect();
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        NotesAction::Add {
            title,
            content,
            category,
        } => {
            let today = Utc::now().date_naive();
            let saved = store.with(|s| {
                let mut editor = NoteEditor::new();
                editor.begin_new();
                editor.draft_mut().title = title;
                editor.draft_mut().content = content;
                editor.draft_mut().category = category;
                let id = editor.save(s, today)?;
                s.notes().iter().find(|n| n.id == id).cloned()
            })?;
            match saved {
                Some(note) => println!("{}", serde_json::to_string_pretty(&note)?),
                None => eprintln!("note discarded: title and content are required"),
            }
        }
        NotesAction::Delete { id } => {
            let remaining = store.with(|s| {
                let mut editor = NoteEditor::new();
                editor.delete(s, id);
                s.notes().len()
            })?;
            println!("{remaining} note(s) remaining");
        }
        NotesAction::Categories => {
            let categories =
                store.with(|s| -> Vec<String> {
                    notes::categories(s.notes()).into_iter().map(String::from).collect()
                })?;
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
    }
    Ok(())
}
