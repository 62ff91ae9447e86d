//! Note CLI commands

use clap::Subcommand;

use crate::display::note::{format_note_details, format_note_list};
use crate::error::SatchelResult;
use crate::services::NoteService;
use crate::storage::Storage;

/// Note subcommands
#[derive(Subcommand)]
pub enum NoteCommands {
    /// Add a new note
    Add {
        /// Note title
        title: String,
        /// Note content
        #[arg(short, long, default_value = "")]
        content: String,
    },
    /// List all notes
    List,
    /// Show a note with its full content
    Show {
        /// Note ID
        id: u64,
    },
    /// Edit a note (omitted fields keep their current value)
    Edit {
        /// Note ID
        id: u64,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: u64,
    },
    /// Export all notes to a CSV file
    Export {
        /// Path to the CSV file to write
        file: String,
    },
    /// Import notes from a CSV file
    Import {
        /// Path to the CSV file to read
        file: String,
    },
}

/// Handle a note command
pub fn handle_note_command(storage: &mut Storage, cmd: NoteCommands) -> SatchelResult<()> {
    let mut service = NoteService::new(storage);

    match cmd {
        NoteCommands::Add { title, content } => {
            let note = service.add(&title, &content)?;
            println!("Created note {} ({})", note.id, note.title);
        }

        NoteCommands::List => {
            print!("{}", format_note_list(service.list()));
        }

        NoteCommands::Show { id } => {
            let note = service.get(id)?;
            print!("{}", format_note_details(note));
        }

        NoteCommands::Edit { id, title, content } => {
            service.edit(
                id,
                title.as_deref().unwrap_or(""),
                content.as_deref().unwrap_or(""),
            )?;
            println!("Updated note {}", id);
        }

        NoteCommands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted note {}", id);
        }

        NoteCommands::Export { file } => {
            let count = service.list().len();
            service.export_csv(&file)?;
            println!("Exported {} notes to {}", count, file);
        }

        NoteCommands::Import { file } => {
            let summary = service.import_csv(&file)?;
            println!(
                "Imported {} notes from {} ({} rows skipped)",
                summary.imported, file, summary.skipped
            );
        }
    }

    Ok(())
}
