//! CSV export
//!
//! Writes a header row with the type's canonical column names, then one row
//! per record in matching field order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{SatchelError, SatchelResult};
use crate::models::Record;

/// Export a collection to CSV
pub fn export_csv<T: Record, W: Write>(records: &[T], writer: &mut W) -> SatchelResult<()> {
    writeln!(writer, "{}", T::CSV_HEADER.join(","))
        .map_err(|e| SatchelError::Export(e.to_string()))?;

    for record in records {
        let row: Vec<String> = record.csv_row().iter().map(|f| escape_csv(f)).collect();
        writeln!(writer, "{}", row.join(",")).map_err(|e| SatchelError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export a collection to a CSV file
pub fn export_csv_file<T: Record, P: AsRef<Path>>(records: &[T], path: P) -> SatchelResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        SatchelError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export_csv(records, &mut writer)?;
    writer
        .flush()
        .map_err(|e| SatchelError::Export(e.to_string()))?;
    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Note;

    #[test]
    fn test_header_written_for_empty_collection() {
        let mut buf = Vec::new();
        export_csv::<Note, _>(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "id,title,content,timestamp\n");
    }

    #[test]
    fn test_rows_in_header_order() {
        let notes = vec![Note::with_timestamp(1, "Title", "Body", "01-01-2024 10:00:00")];
        let mut buf = Vec::new();
        export_csv(&notes, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            "id,title,content,timestamp\n1,Title,Body,01-01-2024 10:00:00\n"
        );
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("two\nlines"), "\"two\nlines\"");
    }
}
