//! # Storage Layer
//!
//! The [`StorageBackend`] trait is the raw load/save mechanism behind the
//! [`AddressBook`](crate::book::AddressBook). The book owns the records and
//! the rules; a backend only moves a [`ContactMap`] to and from somewhere.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, one JSON file per book
//! - [`memory::MemBackend`]: in-memory storage for tests, with write-error
//!   simulation
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── contacts.json       # every contact, keyed by name
//! └── config.json         # optional settings
//! ```
//!
//! `contacts.json` maps each name to `{name, phones, birthday}`. The outer
//! key repeats the inner `name`; loading checks that they agree.

use crate::error::{Result, ValidationError};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Persisted contacts keyed by name. Ordered so saves are deterministic.
pub type ContactMap = BTreeMap<String, StoredRecord>;

/// The on-disk shape of a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

impl From<&Record> for StoredRecord {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record
                .phones()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            birthday: record.birthday().map(|b| b.to_string()),
        }
    }
}

impl StoredRecord {
    /// Rebuilds the record, running every field through its validation.
    pub fn into_record(self) -> std::result::Result<Record, ValidationError> {
        Record::create(&self.name, &self.phones, self.birthday.as_deref())
    }
}

/// Abstract interface for persisting a contact book.
pub trait StorageBackend {
    /// Load every persisted contact. Nothing persisted yet is an empty map,
    /// not an error.
    fn load_contacts(&self) -> Result<ContactMap>;

    /// Replace the persisted contacts with `contacts`.
    fn save_contacts(&self, contacts: &ContactMap) -> Result<()>;

    /// Where the contacts live, for messages. Virtual for non-file backends.
    fn location(&self) -> PathBuf;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_record_mirrors_record() {
        let record = Record::create("Bill", &["123", "456"], Some("1990-01-02")).unwrap();
        let stored = StoredRecord::from(&record);
        assert_eq!(stored.name, "Bill");
        assert_eq!(stored.phones, vec!["123", "456"]);
        assert_eq!(stored.birthday.as_deref(), Some("1990-01-02"));
        assert_eq!(stored.into_record().unwrap(), record);
    }

    #[test]
    fn unset_birthday_serializes_as_null() {
        let record = Record::create("Bill", &["123"], None).unwrap();
        let json = serde_json::to_string(&StoredRecord::from(&record)).unwrap();
        assert_eq!(json, r#"{"name":"Bill","phones":["123"],"birthday":null}"#);
    }

    #[test]
    fn missing_optional_keys_default() {
        let stored: StoredRecord = serde_json::from_str(r#"{"name":"Bill"}"#).unwrap();
        assert!(stored.phones.is_empty());
        assert_eq!(stored.birthday, None);
    }

    #[test]
    fn invalid_stored_fields_fail_validation() {
        let stored = StoredRecord {
            name: "Bill".into(),
            phones: vec!["not a phone".into()],
            birthday: None,
        };
        assert!(matches!(
            stored.into_record(),
            Err(ValidationError::InvalidPhone(_))
        ));
    }
}
