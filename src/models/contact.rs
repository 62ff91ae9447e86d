//! Contact model

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use super::record::{csv_field, csv_id, CsvRowError, Record};

/// An address-book entry. Phone and email are free-form strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier within the contacts collection
    pub id: u64,

    /// Contact name
    pub name: String,

    /// Phone number, kept as entered
    pub phone: String,

    /// Email address, kept as entered
    pub email: String,
}

impl Contact {
    /// Create a new contact
    pub fn new(
        id: u64,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Whether this contact matches a search query: case-insensitive
    /// substring on the name, or exact substring on the phone number.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.phone.contains(query)
    }
}

impl Record for Contact {
    const ENTITY: &'static str = "Contact";
    const FILE_NAME: &'static str = "contacts.json";
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "name", "phone", "email"];
    const CSV_HEADER: &'static [&'static str] = &["id", "name", "phone", "email"];

    fn id(&self) -> u64 {
        self.id
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
        ]
    }

    fn from_csv_row(row: &StringRecord) -> Result<Self, CsvRowError> {
        let id = csv_id(row, 0)?;
        let name = csv_field(row, 1, "name")?.to_string();
        let phone = csv_field(row, 2, "phone")?.to_string();
        let email = csv_field(row, 3, "email")?.to_string();
        Ok(Self::new(id, name, phone, email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_name_case_insensitive() {
        let contact = Contact::new(1, "John Smith", "555-1234", "john@example.com");
        assert!(contact.matches("jo"));
        assert!(contact.matches("SMITH"));
        assert!(!contact.matches("jane"));
    }

    #[test]
    fn test_matches_phone_substring() {
        let contact = Contact::new(1, "John", "555-1234", "");
        assert!(contact.matches("1234"));
        assert!(!contact.matches("9999"));
    }

    #[test]
    fn test_serde_round_trip() {
        let contact = Contact::new(2, "Joan", "555-0000", "joan@example.com");
        let json = serde_json::to_string(&contact).unwrap();
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(contact, back);
    }

    #[test]
    fn test_csv_row_round_trip() {
        let contact = Contact::new(7, "O'Brien, Pat", "555-7777", "pat@example.com");
        let row = StringRecord::from(contact.csv_row());
        assert_eq!(Contact::from_csv_row(&row).unwrap(), contact);
    }
}
