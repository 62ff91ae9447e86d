use anyhow::Result;
use clap::{Parser, Subcommand};

use satchel::cli::{
    handle_contact_command, handle_finance_command, handle_note_command, handle_task_command,
    ContactCommands, FinanceCommands, NoteCommands, TaskCommands,
};
use satchel::config::{paths::SatchelPaths, Settings};
use satchel::storage::Storage;

#[derive(Parser)]
#[command(
    name = "satchel",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal data manager",
    long_about = "satchel-cli is a terminal-based personal data manager. It keeps \
                  notes, tasks, contacts and finance records in plain JSON files \
                  and round-trips each collection through CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Note management commands
    #[command(subcommand)]
    Note(NoteCommands),

    /// Task management commands
    #[command(subcommand)]
    Task(TaskCommands),

    /// Contact management commands
    #[command(subcommand)]
    Contact(ContactCommands),

    /// Finance record commands
    #[command(subcommand, alias = "fin")]
    Finance(FinanceCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SatchelPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage; corrupted documents load as empty collections
    // and are reported here rather than aborting the session.
    let mut storage = Storage::new(paths.clone())?;
    for diagnostic in storage.load_all() {
        eprintln!("warning: {}", diagnostic);
    }

    match cli.command {
        Commands::Note(cmd) => handle_note_command(&mut storage, cmd)?,
        Commands::Task(cmd) => handle_task_command(&mut storage, cmd)?,
        Commands::Contact(cmd) => handle_contact_command(&mut storage, cmd)?,
        Commands::Finance(cmd) => handle_finance_command(&mut storage, &settings, cmd)?,
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Date format:    {}", settings.date_format);
            println!("Currency:       {}", settings.currency_symbol);
        }
    }

    Ok(())
}
