//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::SatchelError;

/// Read a backing document as a raw JSON array. A missing file yields an
/// empty array; any parse failure or non-array document is reported as a
/// malformed document so the caller can fail soft.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Vec<Value>, SatchelError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| SatchelError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    let value: Value = serde_json::from_reader(reader).map_err(|e| {
        SatchelError::MalformedDocument(format!("{} does not parse as JSON: {}", path.display(), e))
    })?;

    match value {
        Value::Array(items) => Ok(items),
        other => Err(SatchelError::MalformedDocument(format!(
            "{} is not a JSON array (found {})",
            path.display(),
            json_type_name(&other)
        ))),
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SatchelError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SatchelError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("json.tmp");

    // Write to temp file
    let file = File::create(&temp_path)
        .map_err(|e| SatchelError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| SatchelError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SatchelError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SatchelError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        SatchelError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let items = read_document(&path).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = vec![TestData {
            name: "test".to_string(),
            value: 42,
        }];

        write_json_atomic(&path, &data).unwrap();
        assert!(path.exists());

        let items = read_document(&path).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "test");
    }

    #[test]
    fn test_read_rejects_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, SatchelError::MalformedDocument(_)));
    }

    #[test]
    fn test_read_rejects_non_array_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("object.json");
        fs::write(&path, r#"{"id": 1}"#).unwrap();

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, SatchelError::MalformedDocument(_)));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        let data = vec![TestData {
            name: "test".to_string(),
            value: 42,
        }];

        write_json_atomic(&path, &data).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &Vec::<TestData>::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_is_pretty_printed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = vec![TestData {
            name: "test".to_string(),
            value: 42,
        }];
        write_json_atomic(&path, &data).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains('\n'));
    }
}
