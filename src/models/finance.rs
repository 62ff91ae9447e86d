//! Finance record model
//!
//! Finance entries are the one entity with a typed, load-bearing date:
//! construction fails hard on a malformed date string.

use chrono::NaiveDate;
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::{self, dd_mm_yyyy};
use super::record::{csv_field, csv_id, CsvRowError, Record};
use crate::error::SatchelResult;

/// Direction of a finance entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    /// Parse an entry type from user input. Accepts the English tokens and
    /// the legacy Russian vocabulary found in older exports.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "доход" => Some(Self::Income),
            "expense" | "расход" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Lowercase token used in CSV rows and JSON documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    /// Unique identifier within the finance collection
    pub id: u64,

    /// Income or expense
    #[serde(rename = "type")]
    pub entry_type: EntryType,

    /// Amount in the user's currency
    pub amount: f64,

    /// Free-form category label ("rent", "salary", ...)
    pub category: String,

    /// Entry date, persisted as `DD-MM-YYYY`
    #[serde(with = "dd_mm_yyyy")]
    pub date: NaiveDate,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl FinanceRecord {
    /// Create a record from a pre-parsed date
    pub fn new(
        id: u64,
        entry_type: EntryType,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            entry_type,
            amount,
            category: category.into(),
            date,
            description: description.into(),
        }
    }

    /// Create a record from a `DD-MM-YYYY` date string. Fails with a
    /// `DateFormat` error when the string is malformed.
    pub fn from_date_str(
        id: u64,
        entry_type: EntryType,
        amount: f64,
        category: impl Into<String>,
        date: &str,
        description: impl Into<String>,
    ) -> SatchelResult<Self> {
        Ok(Self::new(
            id,
            entry_type,
            amount,
            category,
            date::parse_date(date)?,
            description,
        ))
    }
}

impl Record for FinanceRecord {
    const ENTITY: &'static str = "Finance record";
    const FILE_NAME: &'static str = "finance.json";
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["id", "type", "amount", "category", "date", "description"];
    const CSV_HEADER: &'static [&'static str] =
        &["id", "type", "amount", "category", "date", "description"];

    fn id(&self) -> u64 {
        self.id
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.entry_type.as_str().to_string(),
            self.amount.to_string(),
            self.category.clone(),
            date::format_date(self.date),
            self.description.clone(),
        ]
    }

    fn from_csv_row(row: &StringRecord) -> Result<Self, CsvRowError> {
        let id = csv_id(row, 0)?;
        let type_raw = csv_field(row, 1, "type")?;
        let entry_type = EntryType::parse(type_raw)
            .ok_or_else(|| CsvRowError::Coercion(format!("invalid entry type '{}'", type_raw)))?;
        let amount_raw = csv_field(row, 2, "amount")?;
        let amount = amount_raw
            .trim()
            .parse::<f64>()
            .map_err(|_| CsvRowError::Coercion(format!("invalid amount '{}'", amount_raw)))?;
        let category = csv_field(row, 3, "category")?.to_string();
        let date_raw = csv_field(row, 4, "date")?;
        let date = date::parse_date(date_raw)
            .map_err(|_| CsvRowError::Coercion(format!("invalid date '{}'", date_raw)))?;
        // Older exports may omit the trailing description column; treat a
        // missing trailing field as empty rather than structural.
        let description = row.get(5).unwrap_or("").to_string();
        Ok(Self {
            id,
            entry_type,
            amount,
            category,
            date,
            description,
        })
    }
}
