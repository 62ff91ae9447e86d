//! Contact service

use std::path::Path;

use crate::csvio::{export_csv_file, import_csv_file};
use crate::error::{SatchelError, SatchelResult};
use crate::models::Contact;
use crate::storage::Storage;

use super::ImportSummary;

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a contact and persist
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> SatchelResult<Contact> {
        let contact = Contact::new(self.storage.contacts.next_id(), name, phone, email);
        self.storage.contacts.add(contact.clone())?;
        Ok(contact)
    }

    /// All contacts, in collection order
    pub fn list(&self) -> &[Contact] {
        self.storage.contacts.all()
    }

    /// Look up a single contact
    pub fn get(&self, id: u64) -> SatchelResult<&Contact> {
        self.storage
            .contacts
            .get(id)
            .ok_or_else(|| SatchelError::contact_not_found(id))
    }

    /// Search by name (case-insensitive substring) or phone (exact
    /// substring). An empty result list is a normal outcome, not an error.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.storage
            .contacts
            .all()
            .iter()
            .filter(|c| c.matches(query))
            .collect()
    }

    /// Edit a contact with keep-if-blank semantics
    pub fn edit(&mut self, id: u64, name: &str, phone: &str, email: &str) -> SatchelResult<()> {
        self.storage.contacts.update(id, |contact| {
            if !name.is_empty() {
                contact.name = name.to_string();
            }
            if !phone.is_empty() {
                contact.phone = phone.to_string();
            }
            if !email.is_empty() {
                contact.email = email.to_string();
            }
        })
    }

    /// Delete a contact
    pub fn delete(&mut self, id: u64) -> SatchelResult<()> {
        self.storage.contacts.delete(id)
    }

    /// Export all contacts to a CSV file
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> SatchelResult<()> {
        export_csv_file(self.storage.contacts.all(), path)
    }

    /// Import contacts from a CSV file, appending to the collection
    pub fn import_csv<P: AsRef<Path>>(&mut self, path: P) -> SatchelResult<ImportSummary> {
        let outcome = import_csv_file::<Contact, _>(path)?;
        let imported = self.storage.contacts.append_all(outcome.records)?;
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
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SatchelPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all();
        (temp_dir, storage)
    }

    #[test]
    fn test_search_matches_names_case_insensitive() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add("John", "555-1234", "john@example.com").unwrap();
        service.add("Joan", "555-9876", "joan@example.com").unwrap();
        service.add("Mary", "555-0000", "mary@example.com").unwrap();

        let results = service.search("jo");
        let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["John", "Joan"]);
    }

    #[test]
    fn test_search_matches_phone_substring() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add("John", "555-1234", "").unwrap();

        let results = service.search("1234");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "John");
    }

    #[test]
    fn test_search_no_match_is_empty_not_error() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add("John", "555-1234", "").unwrap();

        assert!(service.search("zzz").is_empty());
    }

    #[test]
    fn test_edit_keep_if_blank() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        let contact = service.add("John", "555-1234", "john@example.com").unwrap();

        service.edit(contact.id, "", "555-9999", "").unwrap();
        let edited = service.get(contact.id).unwrap();
        assert_eq!(edited.name, "John");
        assert_eq!(edited.phone, "555-9999");
        assert_eq!(edited.email, "john@example.com");
    }

    #[test]
    fn test_delete_missing_contact_is_not_found() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        assert!(service.delete(1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_csv_round_trip() {
        let (temp_dir, mut storage) = create_test_storage();
        let csv_path = temp_dir.path().join("contacts.csv");

        let mut service = ContactService::new(&mut storage);
        service.add("John", "555-1234", "john@example.com").unwrap();
        service.add("O'Brien, Pat", "555-7777", "").unwrap();
        let exported: Vec<Contact> = service.list().to_vec();
        service.export_csv(&csv_path).unwrap();

        let temp_dir2 = TempDir::new().unwrap();
        let paths2 = SatchelPaths::with_base_dir(temp_dir2.path().to_path_buf());
        let mut storage2 = Storage::new(paths2).unwrap();
        storage2.load_all();
        let mut service2 = ContactService::new(&mut storage2);
        service2.import_csv(&csv_path).unwrap();

        assert_eq!(service2.list(), exported.as_slice());
    }
}
