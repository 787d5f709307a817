//! The in-memory address book index.

use crate::error::StorageResult;
use crate::models::Record;
use crate::storage;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// A collection of contact records keyed by name.
///
/// The key is the record's name value as of insertion time. Iteration and
/// search results follow insertion order; overwriting an existing name
/// keeps its original position, like re-assigning a key in an ordered map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressBook {
    data: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from records, preserving their order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Insert a record, keyed by its name value.
    ///
    /// A record already stored under the same name is silently replaced.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        debug!(contact = %key, "adding record");
        if self.data.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.data.get(name)
    }

    /// Mutable lookup by exact name, for phone edits.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.data.get_mut(name)
    }

    /// All records matching a free-text query, in insertion order.
    ///
    /// A record matches when the query is a case-insensitive substring of
    /// its name, or a case-sensitive substring of any of its phone values.
    pub fn find(&self, query: &str) -> Vec<&Record> {
        let query_lower = query.to_lowercase();
        self.records()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&query_lower)
                    || record.phones().iter().any(|p| p.as_str().contains(query))
            })
            .collect()
    }

    /// Remove the record with that exact name; no-op if absent.
    pub fn delete(&mut self, name: &str) {
        if self.data.remove(name).is_some() {
            debug!(contact = %name, "deleted record");
            self.order.retain(|key| key != name);
        }
    }

    /// Iterate records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        // Invariant: every key in `order` is present in `data`.
        self.order.iter().filter_map(|key| self.data.get(key))
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Persist the whole book to `path` as versioned JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        storage::save(path.as_ref(), self)
    }

    /// Replace this book's contents with the book stored at `path`.
    ///
    /// A missing file yields an empty book; other failures leave the
    /// current contents untouched and return a `StorageError`.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> StorageResult<()> {
        *self = storage::load(path.as_ref())?;
        Ok(())
    }
}
