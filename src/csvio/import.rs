//! CSV import
//!
//! Skips the header row, then coerces each row positionally into a record.
//! The skip/abort rule: a single uncoercible field value (non-numeric id or
//! amount, malformed date, unknown enum token) skips that row and the import
//! continues; a structurally unreadable row (missing columns, CSV syntax
//! error) aborts the whole import with nothing appended.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{SatchelError, SatchelResult};
use crate::models::{CsvRowError, Record};

/// Result of a completed import
#[derive(Debug, Clone)]
pub struct ImportOutcome<T> {
    /// Successfully coerced records, in file order
    pub records: Vec<T>,
    /// Number of rows skipped over field coercion failures
    pub skipped: usize,
}

/// Import a collection from CSV
pub fn import_csv<T: Record, R: Read>(reader: R) -> SatchelResult<ImportOutcome<T>> {
    // flexible: a row with a missing optional trailing column is a record
    // concern, not a reader error; Record::from_csv_row decides.
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0;

    for (index, result) in csv_reader.records().enumerate() {
        let row = result.map_err(|e| {
            SatchelError::CsvStructure(format!("row {}: unreadable record: {}", index + 1, e))
        })?;

        match T::from_csv_row(&row) {
            Ok(record) => records.push(record),
            Err(CsvRowError::Coercion(_)) => skipped += 1,
            Err(CsvRowError::Structure(msg)) => {
                return Err(SatchelError::CsvStructure(format!(
                    "row {}: {}",
                    index + 1,
                    msg
                )));
            }
        }
    }

    Ok(ImportOutcome { records, skipped })
}

/// Import a collection from a CSV file. A missing or unreadable file is a
/// single reported error with no partial processing.
pub fn import_csv_file<T: Record, P: AsRef<Path>>(path: P) -> SatchelResult<ImportOutcome<T>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        SatchelError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;
    import_csv(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csvio::export::export_csv;
    use crate::models::{Contact, EntryType, FinanceRecord, Note, Priority, Task};
    use chrono::NaiveDate;

    #[test]
    fn test_notes_round_trip() {
        let notes = vec![
            Note::with_timestamp(1, "Groceries", "milk, eggs", "01-01-2024 09:00:00"),
            Note::with_timestamp(2, "Quote", "said \"hello\"", "02-01-2024 10:30:00"),
        ];
        let mut buf = Vec::new();
        export_csv(&notes, &mut buf).unwrap();

        let outcome = import_csv::<Note, _>(buf.as_slice()).unwrap();
        assert_eq!(outcome.records, notes);
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_tasks_round_trip() {
        let mut done_task = Task::new(1, "Done thing", "with, comma", Priority::High, "05-05-2024");
        done_task.done = true;
        let tasks = vec![
            done_task,
            Task::new(2, "Open thing", "", Priority::Low, "06-05-2024"),
        ];
        let mut buf = Vec::new();
        export_csv(&tasks, &mut buf).unwrap();

        let outcome = import_csv::<Task, _>(buf.as_slice()).unwrap();
        assert_eq!(outcome.records, tasks);
    }

    #[test]
    fn test_contacts_round_trip() {
        let contacts = vec![
            Contact::new(1, "John", "555-1234", "john@example.com"),
            Contact::new(2, "Joan", "555-0000", ""),
        ];
        let mut buf = Vec::new();
        export_csv(&contacts, &mut buf).unwrap();

        let outcome = import_csv::<Contact, _>(buf.as_slice()).unwrap();
        assert_eq!(outcome.records, contacts);
    }

    #[test]
    fn test_finance_round_trip() {
        let records = vec![
            FinanceRecord::new(
                1,
                EntryType::Income,
                1500.0,
                "salary",
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                "January",
            ),
            FinanceRecord::new(
                2,
                EntryType::Expense,
                42.75,
                "groceries",
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                "",
            ),
        ];
        let mut buf = Vec::new();
        export_csv(&records, &mut buf).unwrap();

        let outcome = import_csv::<FinanceRecord, _>(buf.as_slice()).unwrap();
        assert_eq!(outcome.records, records);
    }

    #[test]
    fn test_uncoercible_amount_skips_row_only() {
        let csv = "id,type,amount,category,date,description\n\
                   1,income,100,salary,01-01-2024,ok\n\
                   2,income,not-a-number,salary,02-01-2024,bad\n\
                   3,expense,30,food,03-01-2024,ok\n";

        let outcome = import_csv::<FinanceRecord, _>(csv.as_bytes()).unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.records[0].id, 1);
        assert_eq!(outcome.records[1].id, 3);
    }

    #[test]
    fn test_short_row_aborts_whole_import() {
        let csv = "id,title,content,timestamp\n\
                   1,ok,body,01-01-2024 09:00:00\n\
                   2,missing\n";

        let err = import_csv::<Note, _>(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SatchelError::CsvStructure(_)));
    }

    #[test]
    fn test_unbalanced_quote_aborts_whole_import() {
        let csv = "id,name,phone,email\n1,\"broken,555,x@example.com\n2,fine,556,y@example.com\nz";

        assert!(import_csv::<Contact, _>(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_header_only_yields_empty() {
        let csv = "id,name,phone,email\n";
        let outcome = import_csv::<Contact, _>(csv.as_bytes()).unwrap();
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = import_csv_file::<Contact, _>("/nonexistent/contacts.csv").unwrap_err();
        assert!(matches!(err, SatchelError::Import(_)));
    }
}
