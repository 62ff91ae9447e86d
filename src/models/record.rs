//! Record contract shared by all four entity types
//!
//! Each entity declares its backing document name, the JSON keys a loaded
//! element must carry, and its CSV column layout as static metadata. The
//! storage and CSV layers are written once against this trait.

use csv::StringRecord;
use serde::{de::DeserializeOwned, Serialize};

/// Why a CSV row could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvRowError {
    /// The row is structurally unreadable (missing columns); aborts the import
    Structure(String),
    /// A single field value is uncoercible; the row is skipped
    Coercion(String),
}

impl std::fmt::Display for CsvRowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structure(msg) => write!(f, "{}", msg),
            Self::Coercion(msg) => write!(f, "{}", msg),
        }
    }
}

/// A persistable entity with a fixed field schema
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Display name used in diagnostics ("Note", "Task", ...)
    const ENTITY: &'static str;

    /// Backing document file name ("notes.json", ...)
    const FILE_NAME: &'static str;

    /// JSON keys every element of the backing document must carry.
    /// Checked before deserialization so a single stray object is reported
    /// as a malformed document rather than a serde error.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Canonical CSV column names, in field declaration order
    const CSV_HEADER: &'static [&'static str];

    /// The record's unique ID within its collection
    fn id(&self) -> u64;

    /// Field values in `CSV_HEADER` order; booleans lowercase, dates DD-MM-YYYY
    fn csv_row(&self) -> Vec<String>;

    /// Coerce a CSV row positionally into a record
    fn from_csv_row(row: &StringRecord) -> Result<Self, CsvRowError>;
}

/// Fetch column `idx` of a row, or fail structurally
pub(crate) fn csv_field<'a>(
    row: &'a StringRecord,
    idx: usize,
    name: &str,
) -> Result<&'a str, CsvRowError> {
    row.get(idx).ok_or_else(|| {
        CsvRowError::Structure(format!("row has no '{}' column (index {})", name, idx))
    })
}

/// Coerce a column into an integer ID
pub(crate) fn csv_id(row: &StringRecord, idx: usize) -> Result<u64, CsvRowError> {
    let raw = csv_field(row, idx, "id")?;
    raw.trim()
        .parse::<u64>()
        .map_err(|_| CsvRowError::Coercion(format!("invalid id '{}'", raw)))
}

/// Coerce a column into a boolean via case-insensitive "true" comparison
pub(crate) fn csv_bool(row: &StringRecord, idx: usize, name: &str) -> Result<bool, CsvRowError> {
    Ok(csv_field(row, idx, name)?.trim().eq_ignore_ascii_case("true"))
}
