//! Contact CLI commands

use clap::Subcommand;

use crate::display::contact::format_contact_list;
use crate::error::SatchelResult;
use crate::services::ContactService;
use crate::storage::Storage;

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// Add a new contact
    Add {
        /// Contact name
        name: String,
        /// Phone number
        #[arg(short, long, default_value = "")]
        phone: String,
        /// Email address
        #[arg(short, long, default_value = "")]
        email: String,
    },
    /// List all contacts
    List,
    /// Search contacts by name or phone number
    Search {
        /// Name fragment (case-insensitive) or phone fragment
        query: String,
    },
    /// Edit a contact (omitted fields keep their current value)
    Edit {
        /// Contact ID
        id: u64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New phone number
        #[arg(short, long)]
        phone: Option<String>,
        /// New email address
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Delete a contact
    Delete {
        /// Contact ID
        id: u64,
    },
    /// Export all contacts to a CSV file
    Export {
        /// Path to the CSV file to write
        file: String,
    },
    /// Import contacts from a CSV file
    Import {
        /// Path to the CSV file to read
        file: String,
    },
}

/// Handle a contact command
pub fn handle_contact_command(storage: &mut Storage, cmd: ContactCommands) -> SatchelResult<()> {
    let mut service = ContactService::new(storage);

    match cmd {
        ContactCommands::Add { name, phone, email } => {
            let contact = service.add(&name, &phone, &email)?;
            println!("Created contact {} ({})", contact.id, contact.name);
        }

        ContactCommands::List => {
            print!("{}", format_contact_list(service.list()));
        }

        ContactCommands::Search { query } => {
            let matches: Vec<_> = service.search(&query).into_iter().cloned().collect();
            if matches.is_empty() {
                println!("No contacts match '{}'.", query);
            } else {
                print!("{}", format_contact_list(&matches));
            }
        }

        ContactCommands::Edit {
            id,
            name,
            phone,
            email,
        } => {
            service.edit(
                id,
                name.as_deref().unwrap_or(""),
                phone.as_deref().unwrap_or(""),
                email.as_deref().unwrap_or(""),
            )?;
            println!("Updated contact {}", id);
        }

        ContactCommands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted contact {}", id);
        }

        ContactCommands::Export { file } => {
            let count = service.list().len();
            service.export_csv(&file)?;
            println!("Exported {} contacts to {}", count, file);
        }

        ContactCommands::Import { file } => {
            let summary = service.import_csv(&file)?;
            println!(
                "Imported {} contacts from {} ({} rows skipped)",
                summary.imported, file, summary.skipped
            );
        }
    }

    Ok(())
}
