//! Note model

use chrono::Local;
use csv::StringRecord;
use serde::{Deserialize, Serialize};

use super::date::TIMESTAMP_FORMAT;
use super::record::{csv_field, csv_id, CsvRowError, Record};

/// A free-form note with a creation timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier within the notes collection
    pub id: u64,

    /// Short title shown in list views
    pub title: String,

    /// Note body
    pub content: String,

    /// Creation timestamp, `DD-MM-YYYY HH:MM:SS`. Stamped from the local
    /// wall clock at creation; carried verbatim through CSV round trips.
    pub timestamp: String,
}

impl Note {
    /// Create a new note stamped with the current local time
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Reconstruct a note with a known timestamp (load, import)
    pub fn with_timestamp(
        id: u64,
        title: impl Into<String>,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }
}

impl Record for Note {
    const ENTITY: &'static str = "Note";
    const FILE_NAME: &'static str = "notes.json";
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "title", "content", "timestamp"];
    const CSV_HEADER: &'static [&'static str] = &["id", "title", "content", "timestamp"];

    fn id(&self) -> u64 {
        self.id
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.content.clone(),
            self.timestamp.clone(),
        ]
    }

    fn from_csv_row(row: &StringRecord) -> Result<Self, CsvRowError> {
        let id = csv_id(row, 0)?;
        let title = csv_field(row, 1, "title")?.to_string();
        let content = csv_field(row, 2, "content")?.to_string();
        let timestamp = csv_field(row, 3, "timestamp")?.to_string();
        Ok(Self::with_timestamp(id, title, content, timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stamps_timestamp() {
        let note = Note::new(1, "Groceries", "milk, eggs");
        assert_eq!(note.id, 1);
        // DD-MM-YYYY HH:MM:SS is always 19 characters
        assert_eq!(note.timestamp.len(), 19);
    }

    #[test]
    fn test_serde_round_trip() {
        let note = Note::with_timestamp(3, "Title", "Content", "01-02-2024 09:30:00");
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, back);
    }

    #[test]
    fn test_serde_round_trip_empty_strings() {
        let note = Note::with_timestamp(1, "", "", "01-01-2024 00:00:00");
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, back);
    }

    #[test]
    fn test_csv_row_round_trip() {
        let note = Note::with_timestamp(12, "Call plumber", "about the sink", "05-03-2024 14:00:00");
        let row = StringRecord::from(note.csv_row());
        assert_eq!(Note::from_csv_row(&row).unwrap(), note);
    }

    #[test]
    fn test_csv_bad_id_is_coercion_error() {
        let row = StringRecord::from(vec!["abc", "t", "c", "01-01-2024 00:00:00"]);
        assert!(matches!(
            Note::from_csv_row(&row),
            Err(CsvRowError::Coercion(_))
        ));
    }

    #[test]
    fn test_csv_short_row_is_structure_error() {
        let row = StringRecord::from(vec!["1", "title"]);
        assert!(matches!(
            Note::from_csv_row(&row),
            Err(CsvRowError::Structure(_))
        ));
    }
}
