//! CLI command handling
//!
//! One subcommand enum and handler per domain. Handlers own all user-facing
//! text; the services below them never print.

pub mod contact;
pub mod finance;
pub mod note;
pub mod task;

pub use contact::{handle_contact_command, ContactCommands};
pub use finance::{handle_finance_command, FinanceCommands};
pub use note::{handle_note_command, NoteCommands};
pub use task::{handle_task_command, TaskCommands};
