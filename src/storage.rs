//! Versioned JSON persistence for the address book.
//!
//! The on-disk layout is deliberately self-describing:
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "Alice Smith", "phones": ["1234567890"], "birthday": "15031990" }
//!   ]
//! }
//! ```
//!
//! Loading a path that does not exist yields an empty book; every other
//! failure surfaces as a [`StorageError`].

use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Newest book-file version this build can read.
pub const FORMAT_VERSION: u32 = 1;

/// Serialized form of a whole book.
#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    version: u32,
    records: Vec<Record>,
}

/// Write the whole book to `path`.
///
/// The file is written to a sibling `.tmp` path and renamed into place, so
/// a crash mid-write cannot leave a truncated book behind.
pub fn save(path: &Path, book: &AddressBook) -> StorageResult<()> {
    let file = BookFile {
        version: FORMAT_VERSION,
        records: book.records().cloned().collect(),
    };
    let json = serde_json::to_string_pretty(&file)?;

    let tmp_path = sibling_tmp_path(path);
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    info!(path = %path.display(), records = file.records.len(), "saved address book");
    Ok(())
}

/// Read a whole book from `path`.
///
/// A missing file is not an error; it yields an empty book.
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "book file absent, starting empty");
            return Ok(AddressBook::new());
        }
        Err(e) => return Err(e.into()),
    };

    let file: BookFile = serde_json::from_str(&json)?;
    if file.version > FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: file.version,
            supported: FORMAT_VERSION,
        });
    }

    info!(path = %path.display(), records = file.records.len(), "loaded address book");
    Ok(AddressBook::from_records(file.records))
}

fn sibling_tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Birthday, ContactName, PhoneNumber};

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(
            Record::new(
                ContactName::new("Alice Smith"),
                PhoneNumber::new("1234567890").unwrap(),
            )
            .with_birthday(Birthday::new("15031990").unwrap()),
        );
        book.add_record(Record::new(
            ContactName::new("Bob Jones"),
            PhoneNumber::new("0987654321").unwrap(),
        ));
        book
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");

        let book = sample_book();
        save(&path, &book).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, book);
        // no stray temp file on the happy path
        assert!(!sibling_tmp_path(&path).exists());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let book = load(&dir.path().join("nope.json")).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_load_garbage_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "not json at all").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(StorageError::Json(_))));
    }

    #[test]
    fn test_load_future_version_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, r#"{"version": 99, "records": []}"#).unwrap();

        let result = load(&path);
        assert!(matches!(
            result,
            Err(StorageError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_saved_file_is_versioned_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        save(&path, &sample_book()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["records"][0]["name"], "Alice Smith");
        assert_eq!(json["records"][0]["birthday"], "15031990");
        assert_eq!(json["records"][1]["birthday"], serde_json::Value::Null);
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        save(&path, &sample_book()).unwrap();
        save(&path, &AddressBook::new()).unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.is_empty());
    }
}
