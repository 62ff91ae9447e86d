//! Note service

use std::path::Path;

use crate::csvio::{export_csv_file, import_csv_file};
use crate::error::{SatchelError, SatchelResult};
use crate::models::Note;
use crate::storage::Storage;

use super::ImportSummary;

/// Service for note management
pub struct NoteService<'a> {
    storage: &'a mut Storage,
}

impl<'a> NoteService<'a> {
    /// Create a new note service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a note, stamped with the current local time, and persist
    pub fn add(&mut self, title: &str, content: &str) -> SatchelResult<Note> {
        let note = Note::new(self.storage.notes.next_id(), title, content);
        self.storage.notes.add(note.clone())?;
        Ok(note)
    }

    /// All notes, in collection order
    pub fn list(&self) -> &[Note] {
        self.storage.notes.all()
    }

    /// Look up a single note for the detail view
    pub fn get(&self, id: u64) -> SatchelResult<&Note> {
        self.storage
            .notes
            .get(id)
            .ok_or_else(|| SatchelError::note_not_found(id))
    }

    /// Edit a note with keep-if-blank semantics: an empty argument leaves
    /// the current value unchanged.
    pub fn edit(&mut self, id: u64, title: &str, content: &str) -> SatchelResult<()> {
        self.storage.notes.update(id, |note| {
            if !title.is_empty() {
                note.title = title.to_string();
            }
            if !content.is_empty() {
                note.content = content.to_string();
            }
        })
    }

    /// Delete a note
    pub fn delete(&mut self, id: u64) -> SatchelResult<()> {
        self.storage.notes.delete(id)
    }

    /// Export all notes to a CSV file
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> SatchelResult<()> {
        export_csv_file(self.storage.notes.all(), path)
    }

    /// Import notes from a CSV file, appending to the collection
    pub fn import_csv<P: AsRef<Path>>(&mut self, path: P) -> SatchelResult<ImportSummary> {
        let outcome = import_csv_file::<Note, _>(path)?;
        let imported = self.storage.notes.append_all(outcome.records)?;
        Ok(ImportSummary {
            imported,
            skipped: outcome.skipped,
        })
    }
}
