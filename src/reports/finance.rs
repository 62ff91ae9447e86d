//! Finance report
//!
//! Aggregates income and expenses over an inclusive date window.

use chrono::NaiveDate;

use crate::models::{EntryType, FinanceRecord};

/// Income/expense summary for a date range
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceReport {
    /// Start of the window (inclusive)
    pub start_date: NaiveDate,
    /// End of the window (inclusive)
    pub end_date: NaiveDate,
    /// Records falling inside the window, in collection order
    pub records: Vec<FinanceRecord>,
    /// Sum of income amounts in the window
    pub total_income: f64,
    /// Sum of expense amounts in the window
    pub total_expense: f64,
    /// `total_income - total_expense`
    pub balance: f64,
}

impl FinanceReport {
    /// Generate a report over `start_date <= record.date <= end_date`
    pub fn generate(records: &[FinanceRecord], start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let records: Vec<FinanceRecord> = records
            .iter()
            .filter(|r| r.date >= start_date && r.date <= end_date)
            .cloned()
            .collect();

        let total_income: f64 = records
            .iter()
            .filter(|r| r.entry_type == EntryType::Income)
            .map(|r| r.amount)
            .sum();
        let total_expense: f64 = records
            .iter()
            .filter(|r| r.entry_type == EntryType::Expense)
            .map(|r| r.amount)
            .sum();

        Self {
            start_date,
            end_date,
            records,
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// Whether no records fell inside the window
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
