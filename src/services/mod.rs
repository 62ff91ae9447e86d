//! Service layer for satchel-cli
//!
//! The service layer provides the per-domain operations on top of the
//! storage layer: ID assignment, keep-if-blank edits, search and filtering,
//! and CSV import/export glue.

pub mod contacts;
pub mod finance;
pub mod notes;
pub mod tasks;

pub use contacts::ContactService;
pub use finance::FinanceService;
pub use notes::NoteService;
pub use tasks::TaskService;

/// Counts reported back from a completed CSV import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records appended to the collection
    pub imported: usize,
    /// Rows skipped over field coercion failures
    pub skipped: usize,
}
