//! Finance service

use std::path::Path;

use chrono::NaiveDate;

use crate::csvio::{export_csv_file, import_csv_file};
use crate::error::{SatchelError, SatchelResult};
use crate::models::{date, EntryType, FinanceRecord};
use crate::reports::FinanceReport;
use crate::storage::Storage;

use super::ImportSummary;

/// Service for finance record management
pub struct FinanceService<'a> {
    storage: &'a mut Storage,
}

impl<'a> FinanceService<'a> {
    /// Create a new finance service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a finance record and persist. The date string is parsed
    /// eagerly; a malformed date fails the whole operation.
    pub fn add(
        &mut self,
        entry_type: EntryType,
        amount: f64,
        category: &str,
        date: &str,
        description: &str,
    ) -> SatchelResult<FinanceRecord> {
        let record = FinanceRecord::from_date_str(
            self.storage.finance.next_id(),
            entry_type,
            amount,
            category,
            date,
            description,
        )?;
        self.storage.finance.add(record.clone())?;
        Ok(record)
    }

    /// All finance records, in collection order
    pub fn list(&self) -> &[FinanceRecord] {
        self.storage.finance.all()
    }

    /// Look up a single record
    pub fn get(&self, id: u64) -> SatchelResult<&FinanceRecord> {
        self.storage
            .finance
            .get(id)
            .ok_or_else(|| SatchelError::finance_record_not_found(id))
    }

    /// Filter records by exact date and/or exact category. Both filters are
    /// optional and combine with AND semantics.
    pub fn filter(
        &self,
        date_filter: Option<&str>,
        category_filter: Option<&str>,
    ) -> SatchelResult<Vec<&FinanceRecord>> {
        let date_filter: Option<NaiveDate> = match date_filter {
            Some(s) => Some(date::parse_date(s)?),
            None => None,
        };

        Ok(self
            .storage
            .finance
            .all()
            .iter()
            .filter(|r| date_filter.map_or(true, |d| r.date == d))
            .filter(|r| category_filter.map_or(true, |c| r.category == c))
            .collect())
    }

    /// Generate an income/expense report over an inclusive date window.
    /// Either boundary failing to parse aborts with a date format error.
    pub fn report(&self, start_date: &str, end_date: &str) -> SatchelResult<FinanceReport> {
        let start = date::parse_date(start_date)?;
        let end = date::parse_date(end_date)?;
        Ok(FinanceReport::generate(
            self.storage.finance.all(),
            start,
            end,
        ))
    }

    /// Delete a finance record
    pub fn delete(&mut self, id: u64) -> SatchelResult<()> {
        self.storage.finance.delete(id)
    }

    /// Export all finance records to a CSV file
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> SatchelResult<()> {
        export_csv_file(self.storage.finance.all(), path)
    }

    /// Import finance records from a CSV file, appending to the collection.
    /// Rows with uncoercible numeric fields are skipped; structural errors
    /// abort the import.
    pub fn import_csv<P: AsRef<Path>>(&mut self, path: P) -> SatchelResult<ImportSummary> {
        let outcome = import_csv_file::<FinanceRecord, _>(path)?;
        let imported = self.storage.finance.append_all(outcome.records)?;
        Ok(ImportSummary {
            imported,
            skipped: outcome.skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SatchelPaths;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SatchelPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_rejects_malformed_date() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = FinanceService::new(&mut storage);

        let err = service
            .add(EntryType::Income, 10.0, "salary", "01/01/2024", "")
            .unwrap_err();
        assert!(matches!(err, SatchelError::DateFormat(_)));
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_filter_by_date_and_category() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = FinanceService::new(&mut storage);
        service
            .add(EntryType::Expense, 20.0, "food", "01-01-2024", "")
            .unwrap();
        service
            .add(EntryType::Expense, 30.0, "food", "02-01-2024", "")
            .unwrap();
        service
            .add(EntryType::Expense, 40.0, "rent", "01-01-2024", "")
            .unwrap();

        assert_eq!(service.filter(None, None).unwrap().len(), 3);
        assert_eq!(service.filter(Some("01-01-2024"), None).unwrap().len(), 2);
        assert_eq!(service.filter(None, Some("food")).unwrap().len(), 2);
        let both = service.filter(Some("01-01-2024"), Some("food")).unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].amount, 20.0);
    }

    #[test]
    fn test_filter_rejects_malformed_date() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = FinanceService::new(&mut storage);
        service
            .add(EntryType::Income, 1.0, "x", "01-01-2024", "")
            .unwrap();

        assert!(matches!(
            service.filter(Some("January 1st"), None),
            Err(SatchelError::DateFormat(_))
        ));
    }

    #[test]
    fn test_report_matches_window() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = FinanceService::new(&mut storage);
        service
            .add(EntryType::Income, 100.0, "salary", "01-01-2024", "")
            .unwrap();
        service
            .add(EntryType::Expense, 30.0, "food", "15-01-2024", "")
            .unwrap();
        service
            .add(EntryType::Income, 50.0, "salary", "01-02-2024", "")
            .unwrap();

        let report = service.report("01-01-2024", "31-01-2024").unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.total_income, 100.0);
        assert_eq!(report.total_expense, 30.0);
        assert_eq!(report.balance, 70.0);
    }

    #[test]
    fn test_report_rejects_malformed_boundary() {
        let (_temp_dir, mut storage) = create_test_storage();
        let service = FinanceService::new(&mut storage);

        assert!(matches!(
            service.report("01-01-2024", "soon"),
            Err(SatchelError::DateFormat(_))
        ));
    }

    #[test]
    fn test_import_skips_bad_amount_rows() {
        let (temp_dir, mut storage) = create_test_storage();
        let csv_path = temp_dir.path().join("finance.csv");
        fs::write(
            &csv_path,
            "id,type,amount,category,date,description\n\
             1,income,100,salary,01-01-2024,ok\n\
             2,expense,oops,food,02-01-2024,bad amount\n\
             3,expense,30,food,03-01-2024,ok\n",
        )
        .unwrap();

        let mut service = FinanceService::new(&mut storage);
        let summary = service.import_csv(&csv_path).unwrap();
        assert_eq!(summary, ImportSummary { imported: 2, skipped: 1 });
        assert_eq!(service.list().len(), 2);
    }

    #[test]
    fn test_csv_round_trip() {
        let (temp_dir, mut storage) = create_test_storage();
        let csv_path = temp_dir.path().join("finance.csv");

        let mut service = FinanceService::new(&mut storage);
        service
            .add(EntryType::Income, 1500.5, "salary", "01-01-2024", "January pay")
            .unwrap();
        service
            .add(EntryType::Expense, 42.75, "groceries", "15-01-2024", "")
            .unwrap();
        let exported: Vec<FinanceRecord> = service.list().to_vec();
        service.export_csv(&csv_path).unwrap();

        let temp_dir2 = TempDir::new().unwrap();
        let paths2 = SatchelPaths::with_base_dir(temp_dir2.path().to_path_buf());
        let mut storage2 = Storage::new(paths2).unwrap();
        storage2.load_all();
        let mut service2 = FinanceService::new(&mut storage2);
        service2.import_csv(&csv_path).unwrap();

        assert_eq!(service2.list(), exported.as_slice());
    }
}
