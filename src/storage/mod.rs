//! Storage layer for satchel-cli
//!
//! Provides JSON file storage with atomic writes, fail-soft loading, and
//! automatic directory creation.

pub mod file_io;
pub mod repository;

pub use file_io::{read_document, write_json_atomic};
pub use repository::Repository;

use crate::config::paths::SatchelPaths;
use crate::error::{SatchelError, SatchelResult};
use crate::models::{Contact, FinanceRecord, Note, Record, Task};

/// Main storage coordinator that provides access to all four collections
pub struct Storage {
    paths: SatchelPaths,
    pub notes: Repository<Note>,
    pub tasks: Repository<Task>,
    pub contacts: Repository<Contact>,
    pub finance: Repository<FinanceRecord>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SatchelPaths) -> SatchelResult<Self> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            notes: Repository::new(paths.data_file(Note::FILE_NAME)),
            tasks: Repository::new(paths.data_file(Task::FILE_NAME)),
            contacts: Repository::new(paths.data_file(Contact::FILE_NAME)),
            finance: Repository::new(paths.data_file(FinanceRecord::FILE_NAME)),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SatchelPaths {
        &self.paths
    }

    /// Load all collections from disk.
    ///
    /// Each collection loads independently and fails soft: a corrupted
    /// document leaves that one collection empty and contributes a
    /// diagnostic, while the others load normally. The returned diagnostics
    /// are for the front end to render as warnings.
    pub fn load_all(&mut self) -> Vec<SatchelError> {
        let mut diagnostics = Vec::new();
        diagnostics.extend(self.notes.load());
        diagnostics.extend(self.tasks.load());
        diagnostics.extend(self.contacts.load());
        diagnostics.extend(self.finance.load());
        diagnostics
    }

    /// Save all collections to disk
    pub fn save_all(&self) -> SatchelResult<()> {
        self.notes.save()?;
        self.tasks.save()?;
        self.contacts.save()?;
        self.finance.save()?;
        Ok(())
    }
}
