//! Finance CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::finance::{format_finance_list, format_report};
use crate::error::{SatchelError, SatchelResult};
use crate::models::EntryType;
use crate::services::FinanceService;
use crate::storage::Storage;

/// Finance subcommands
#[derive(Subcommand)]
pub enum FinanceCommands {
    /// Add a finance record
    Add {
        /// Entry type (income or expense)
        entry_type: String,
        /// Amount
        amount: f64,
        /// Category label
        category: String,
        /// Entry date (DD-MM-YYYY)
        date: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List finance records, optionally filtered
    List {
        /// Only records on this exact date (DD-MM-YYYY)
        #[arg(short, long)]
        date: Option<String>,
        /// Only records with this exact category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Income/expense report over a date range
    Report {
        /// Start date (DD-MM-YYYY), inclusive
        start: String,
        /// End date (DD-MM-YYYY), inclusive
        end: String,
    },
    /// Delete a finance record
    Delete {
        /// Record ID
        id: u64,
    },
    /// Export all finance records to a CSV file
    Export {
        /// Path to the CSV file to write
        file: String,
    },
    /// Import finance records from a CSV file
    Import {
        /// Path to the CSV file to read
        file: String,
    },
}

/// Handle a finance command
pub fn handle_finance_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: FinanceCommands,
) -> SatchelResult<()> {
    let mut service = FinanceService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        FinanceCommands::Add {
            entry_type,
            amount,
            category,
            date,
            description,
        } => {
            let entry_type = EntryType::parse(&entry_type).ok_or_else(|| {
                SatchelError::Validation(format!(
                    "Invalid entry type: '{}'. Valid values: income, expense",
                    entry_type
                ))
            })?;
            let record = service.add(entry_type, amount, &category, &date, &description)?;
            println!(
                "Created {} record {} ({}{:.2}, {})",
                record.entry_type, record.id, currency, record.amount, record.category
            );
        }

        FinanceCommands::List { date, category } => {
            let records = service.filter(date.as_deref(), category.as_deref())?;
            print!("{}", format_finance_list(&records, currency));
        }

        FinanceCommands::Report { start, end } => {
            let report = service.report(&start, &end)?;
            print!("{}", format_report(&report, currency));
        }

        FinanceCommands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted finance record {}", id);
        }

        FinanceCommands::Export { file } => {
            let count = service.list().len();
            service.export_csv(&file)?;
            println!("Exported {} finance records to {}", count, file);
        }

        FinanceCommands::Import { file } => {
            let summary = service.import_csv(&file)?;
            println!(
                "Imported {} finance records from {} ({} rows skipped)",
                summary.imported, file, summary.skipped
            );
        }
    }

    Ok(())
}
