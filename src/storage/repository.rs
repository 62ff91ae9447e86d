//! Generic record repository
//!
//! One repository per collection: an ordered in-memory list of records plus
//! the backing JSON document. Every mutating call re-synchronizes the
//! document with a full atomic rewrite.

use std::path::PathBuf;

use serde_json::Value;

use crate::error::{SatchelError, SatchelResult};
use crate::models::Record;

use super::file_io::{read_document, write_json_atomic};

/// A homogeneous collection of records backed by one JSON document
pub struct Repository<T: Record> {
    path: PathBuf,
    records: Vec<T>,
}

impl<T: Record> Repository<T> {
    /// Create a repository over a backing document (not yet loaded)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: Vec::new(),
        }
    }

    /// Load records from disk, failing soft.
    ///
    /// A missing file yields an empty collection silently. A document that
    /// doesn't parse, isn't an array, or contains an element missing a
    /// required field also yields an empty collection, with the diagnostic
    /// returned for the front end to report. One corrupted file must never
    /// take down the rest of the session.
    pub fn load(&mut self) -> Option<SatchelError> {
        match self.read_records() {
            Ok(records) => {
                self.records = records;
                None
            }
            Err(err) => {
                self.records.clear();
                Some(err)
            }
        }
    }

    fn read_records(&self) -> SatchelResult<Vec<T>> {
        let items = read_document(&self.path)?;

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let object = item.as_object().ok_or_else(|| {
                SatchelError::MalformedDocument(format!(
                    "{}: element {} is not an object",
                    self.path.display(),
                    index
                ))
            })?;

            for field in T::REQUIRED_FIELDS {
                if !object.contains_key(*field) {
                    return Err(SatchelError::MalformedDocument(format!(
                        "{}: element {} is missing required field '{}'",
                        self.path.display(),
                        index,
                        field
                    )));
                }
            }

            let record: T = serde_json::from_value(Value::Object(object.clone())).map_err(|e| {
                SatchelError::MalformedDocument(format!(
                    "{}: element {} is not a valid {}: {}",
                    self.path.display(),
                    index,
                    T::ENTITY,
                    e
                ))
            })?;
            records.push(record);
        }

        Ok(records)
    }

    /// Persist the full collection with an atomic rewrite
    pub fn save(&self) -> SatchelResult<()> {
        write_json_atomic(&self.path, &self.records)
    }

    /// All records, in collection order
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The next free ID: one past the highest existing ID, so a deleted
    /// middle record can never cause a collision.
    pub fn next_id(&self) -> u64 {
        self.records.iter().map(Record::id).max().unwrap_or(0) + 1
    }

    /// Append a record and persist
    pub fn add(&mut self, record: T) -> SatchelResult<()> {
        self.records.push(record);
        self.save()
    }

    /// Find a record by ID (linear scan)
    pub fn get(&self, id: u64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Apply a mutation to the record with the given ID and persist.
    /// `NotFound` leaves the collection and the document untouched.
    pub fn update<F>(&mut self, id: u64, mutate: F) -> SatchelResult<()>
    where
        F: FnOnce(&mut T),
    {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(SatchelError::NotFound {
                entity_type: T::ENTITY,
                id,
            })?;
        mutate(record);
        self.save()
    }

    /// Remove the first record with the given ID and persist.
    /// `NotFound` leaves the collection and the document untouched.
    pub fn delete(&mut self, id: u64) -> SatchelResult<()> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(SatchelError::NotFound {
                entity_type: T::ENTITY,
                id,
            })?;
        self.records.remove(index);
        self.save()
    }

    /// Append a batch of records (CSV import) with a single persist
    pub fn append_all(&mut self, records: Vec<T>) -> SatchelResult<usize> {
        let count = records.len();
        self.records.extend(records);
        self.save()?;
        Ok(count)
    }
}
