//! # Contact Store
//!
//! [`AddressBook`] is the single source of truth for contacts: a map from
//! name to [`Record`] plus the backend it persists to.
//!
//! ## Write-through
//!
//! Every mutation saves the whole book before returning. A mutation is
//! applied in memory first; if the save fails, the previous state of that
//! entry is put back and the persistence error is returned, so memory and
//! disk never disagree after a call.
//!
//! ## Ownership
//!
//! Callers only ever see `&Record` (or clones). Edits go through
//! [`AddressBook::modify`] and friends, which run field validation and
//! persistence. Read iterators and [`Pages`] borrow the book, so it cannot
//! change underneath them.
//!
//! ## Ordering
//!
//! Iteration is ascending by name. That keeps saves byte-stable; callers
//! should still treat the order as unspecified.

use crate::error::{BookError, Result, ValidationError};
use crate::page::Pages;
use crate::record::Record;
use crate::store::{ContactMap, StorageBackend, StoredRecord};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub struct AddressBook<B: StorageBackend> {
    records: BTreeMap<String, Record>,
    backend: B,
}

impl<B: StorageBackend> AddressBook<B> {
    /// An empty book that has not loaded anything yet.
    pub fn new(backend: B) -> Self {
        Self {
            records: BTreeMap::new(),
            backend,
        }
    }

    /// Builds a book and loads whatever the backend holds.
    pub fn open(backend: B) -> Result<Self> {
        let mut book = Self::new(backend);
        book.load()?;
        Ok(book)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Inserts `record`, replacing any contact with the same name.
    pub fn add(&mut self, record: Record) -> Result<()> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key.clone(), record);
        self.persist_or_restore(key, previous)
    }

    pub fn find(&self, name: &str) -> Result<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// Replaces the contact's phones with the single `new_phone`.
    pub fn update_phone(&mut self, name: &str, new_phone: &str) -> Result<()> {
        self.modify(name, |record| record.replace_phones(new_phone))
    }

    /// Applies `edit` to the named contact and persists the result.
    ///
    /// The edit runs on a copy; the book only changes if the edit succeeds.
    /// An edit that leaves the record as it was does not touch the backend.
    pub fn modify<T, F>(&mut self, name: &str, edit: F) -> Result<T>
    where
        F: FnOnce(&mut Record) -> std::result::Result<T, ValidationError>,
    {
        let current = self.find(name)?;
        let mut updated = current.clone();
        let outcome = edit(&mut updated)?;
        if &updated == current {
            return Ok(outcome);
        }

        let previous = self.records.insert(name.to_string(), updated);
        self.persist_or_restore(name.to_string(), previous)?;
        Ok(outcome)
    }

    /// Deletes the named contact, returning it.
    pub fn remove(&mut self, name: &str) -> Result<Record> {
        let removed = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        if let Err(e) = self.save() {
            warn!(name, error = %e, "save failed, contact restored");
            self.records.insert(name.to_string(), removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Every `(name, record)` pair.
    pub fn list_all(&self) -> impl Iterator<Item = (&str, &Record)> + '_ {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn paginate(&self, page_size: usize) -> Result<Pages<'_>> {
        if page_size == 0 {
            return Err(BookError::InvalidArgument(
                "page size must be a positive integer".to_string(),
            ));
        }
        Ok(Pages::new(self.records.values(), page_size))
    }

    /// Records whose name or any phone contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.records
            .values()
            .filter(|record| record.matches(query))
            .collect()
    }

    /// Records with a birthday in the next `within_days` days (today
    /// included), soonest first.
    pub fn upcoming_birthdays(&self, within_days: u32) -> Vec<(&Record, u32)> {
        self.upcoming_birthdays_from(Local::now().date_naive(), within_days)
    }

    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        within_days: u32,
    ) -> Vec<(&Record, u32)> {
        let mut upcoming: Vec<_> = self
            .records
            .values()
            .filter_map(|record| {
                record
                    .days_to_birthday_from(today)
                    .filter(|days| *days <= within_days)
                    .map(|days| (record, days))
            })
            .collect();
        upcoming.sort_by(|(a, days_a), (b, days_b)| {
            days_a.cmp(days_b).then_with(|| a.name().cmp(b.name()))
        });
        upcoming
    }

    /// Writes the whole book to the backend.
    pub fn save(&self) -> Result<()> {
        let contacts: ContactMap = self
            .records
            .iter()
            .map(|(name, record)| (name.clone(), StoredRecord::from(record)))
            .collect();
        self.backend.save_contacts(&contacts)
    }

    /// Replaces the book's contents with what the backend holds.
    ///
    /// On any failure the book is left empty rather than half loaded.
    pub fn load(&mut self) -> Result<()> {
        self.records.clear();

        let stored = self.backend.load_contacts()?;
        let mut records = BTreeMap::new();
        for (key, entry) in stored {
            if key != entry.name {
                return Err(BookError::CorruptData(format!(
                    "entry '{}' holds contact '{}'",
                    key, entry.name
                )));
            }
            let record = entry
                .into_record()
                .map_err(|e| BookError::CorruptData(format!("contact '{}': {}", key, e)))?;
            records.insert(key, record);
        }

        debug!(count = records.len(), location = %self.backend.location().display(), "book loaded");
        self.records = records;
        Ok(())
    }

    fn persist_or_restore(&mut self, key: String, previous: Option<Record>) -> Result<()> {
        if let Err(e) = self.save() {
            warn!(name = %key, error = %e, "save failed, change rolled back");
            match previous {
                Some(record) => {
                    self.records.insert(key, record);
                }
                None => {
                    self.records.remove(&key);
                }
            }
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::book_with;
    use crate::store::memory::MemBackend;
    use std::collections::HashSet;

    fn phones_of<B: StorageBackend>(book: &AddressBook<B>, name: &str) -> Vec<String> {
        book.find(name)
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn add_then_find() {
        let mut book = AddressBook::new(MemBackend::new());
        book.add(Record::create("Bill", &["1234567890"], None).unwrap())
            .unwrap();

        let found = book.find("Bill").unwrap();
        assert_eq!(found.name().as_str(), "Bill");
        assert_eq!(phones_of(&book, "Bill"), vec!["1234567890"]);
    }

    #[test]
    fn add_with_same_name_replaces() {
        let mut book = AddressBook::new(MemBackend::new());
        book.add(Record::create("Bill", &["1234567890"], None).unwrap())
            .unwrap();
        book.add(Record::create("Bill", &["5551234567"], None).unwrap())
            .unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(phones_of(&book, "Bill"), vec!["5551234567"]);
    }

    #[test]
    fn every_mutation_is_written_through() {
        let mut book = AddressBook::new(MemBackend::new());
        book.add(Record::create("Bill", &["1"], None).unwrap())
            .unwrap();
        assert_eq!(book.backend().save_count(), 1);
        book.update_phone("Bill", "2").unwrap();
        assert_eq!(book.backend().save_count(), 2);
        book.remove("Bill").unwrap();
        assert_eq!(book.backend().save_count(), 3);
        assert!(book.backend().snapshot().is_empty());
    }

    #[test]
    fn find_missing_is_not_found() {
        let book = AddressBook::new(MemBackend::new());
        assert!(matches!(book.find("Nobody"), Err(BookError::NotFound(n)) if n == "Nobody"));
    }

    #[test]
    fn lookup_is_exact() {
        let book = book_with(&[("Bill", &["1"])]);
        assert!(book.find("bill").is_err());
        assert!(book.find("Bil").is_err());
    }

    #[test]
    fn update_phone_replaces_list() {
        let mut book = book_with(&[("Bill", &["1", "2"])]);
        book.update_phone("Bill", "3").unwrap();
        assert_eq!(phones_of(&book, "Bill"), vec!["3"]);
    }

    #[test]
    fn update_phone_errors() {
        let mut book = book_with(&[("Bill", &["1"])]);
        let saves = book.backend().save_count();

        assert!(matches!(
            book.update_phone("Nobody", "3"),
            Err(BookError::NotFound(_))
        ));
        assert!(matches!(
            book.update_phone("Bill", "three"),
            Err(BookError::Validation(ValidationError::InvalidPhone(_)))
        ));
        assert_eq!(phones_of(&book, "Bill"), vec!["1"]);
        assert_eq!(book.backend().save_count(), saves);
    }

    #[test]
    fn failed_add_rolls_back_new_contact() {
        let mut book = book_with(&[("Bill", &["1"])]);
        book.backend().set_simulate_write_error(true);

        let result = book.add(Record::create("Ann", &["2"], None).unwrap());
        assert!(matches!(result, Err(BookError::Persistence(_))));
        assert!(!book.contains("Ann"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn failed_add_restores_replaced_contact() {
        let mut book = book_with(&[("Bill", &["1"])]);
        book.backend().set_simulate_write_error(true);

        assert!(book
            .add(Record::create("Bill", &["2"], None).unwrap())
            .is_err());
        assert_eq!(phones_of(&book, "Bill"), vec!["1"]);
    }

    #[test]
    fn failed_update_and_remove_roll_back() {
        let mut book = book_with(&[("Bill", &["1"])]);
        book.backend().set_simulate_write_error(true);

        assert!(book.update_phone("Bill", "2").is_err());
        assert_eq!(phones_of(&book, "Bill"), vec!["1"]);

        assert!(book.remove("Bill").is_err());
        assert!(book.contains("Bill"));
    }

    #[test]
    fn modify_without_change_skips_save() {
        let mut book = book_with(&[("Bill", &["1"])]);
        let saves = book.backend().save_count();

        let removed = book.modify("Bill", |r| Ok(r.remove_phone("9"))).unwrap();
        assert!(!removed);
        assert_eq!(book.backend().save_count(), saves);

        book.modify("Bill", |r| r.add_phone("2")).unwrap();
        assert_eq!(book.backend().save_count(), saves + 1);
        assert_eq!(phones_of(&book, "Bill"), vec!["1", "2"]);
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut book = AddressBook::new(MemBackend::new());
        assert!(matches!(book.remove("Nobody"), Err(BookError::NotFound(_))));
    }

    #[test]
    fn list_all_is_restartable() {
        let book = book_with(&[("Bill", &["1"]), ("Ann", &["2"]), ("Zed", &[])]);
        let first: Vec<_> = book.list_all().map(|(name, _)| name).collect();
        let second: Vec<_> = book.list_all().map(|(name, _)| name).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn paginate_partitions_records() {
        let book = book_with(&[
            ("A", &["1"]),
            ("B", &["2"]),
            ("C", &["3"]),
            ("D", &["4"]),
            ("E", &["5"]),
        ]);
        let pages: Vec<_> = book.paginate(2).unwrap().collect();
        let sizes: Vec<_> = pages.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);

        let names: HashSet<_> = pages
            .iter()
            .flatten()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(names.len(), 5);

        assert_eq!(book.paginate(5).unwrap().count(), 1);
        assert_eq!(book.paginate(10).unwrap().len(), 1);
    }

    #[test]
    fn paginate_empty_book_has_no_pages() {
        let book = AddressBook::new(MemBackend::new());
        assert_eq!(book.paginate(3).unwrap().count(), 0);
    }

    #[test]
    fn paginate_rejects_zero() {
        let book = book_with(&[("A", &["1"])]);
        assert!(matches!(
            book.paginate(0),
            Err(BookError::InvalidArgument(_))
        ));
    }

    #[test]
    fn search_matches_name_and_phone() {
        let book = book_with(&[
            ("Bill", &["555-0001"]),
            ("Ann", &["555-0002"]),
            ("Zed", &["777"]),
        ]);

        assert_eq!(book.search("").len(), 3);
        let by_name: Vec<_> = book
            .search("BIL")
            .into_iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(by_name, vec!["Bill"]);
        assert_eq!(book.search("555").len(), 2);
        assert!(book.search("nobody").is_empty());
    }

    #[test]
    fn upcoming_birthdays_sorted_by_days() {
        let mut book = AddressBook::new(MemBackend::new());
        for (name, birthday) in [
            ("Far", "1980-03-01"),
            ("Today", "1990-01-10"),
            ("Soon", "1985-01-12"),
            ("Also Soon", "1970-01-12"),
        ] {
            book.add(Record::create::<&str>(name, &[], Some(birthday)).unwrap())
                .unwrap();
        }
        book.add(Record::create("NoDate", &["1"], None).unwrap())
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let upcoming: Vec<_> = book
            .upcoming_birthdays_from(today, 7)
            .into_iter()
            .map(|(r, days)| (r.name().as_str(), days))
            .collect();
        assert_eq!(
            upcoming,
            vec![("Today", 0), ("Also Soon", 2), ("Soon", 2)]
        );
    }

    #[test]
    fn load_rebuilds_records() {
        let source = book_with(&[("Bill", &["1", "2"]), ("Ann", &[])]);
        let backend = MemBackend::with_contacts(source.backend().snapshot());

        let loaded = AddressBook::open(backend).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.find("Bill").unwrap(), source.find("Bill").unwrap());
    }

    #[test]
    fn load_rejects_mismatched_key() {
        let mut contacts = ContactMap::new();
        contacts.insert(
            "Bill".into(),
            StoredRecord {
                name: "William".into(),
                phones: vec![],
                birthday: None,
            },
        );
        let result = AddressBook::open(MemBackend::with_contacts(contacts));
        assert!(matches!(result, Err(BookError::CorruptData(_))));
    }

    #[test]
    fn load_failure_leaves_book_empty() {
        let mut contacts = ContactMap::new();
        contacts.insert(
            "Ann".into(),
            StoredRecord {
                name: "Ann".into(),
                phones: vec!["1".into()],
                birthday: None,
            },
        );
        contacts.insert(
            "Bill".into(),
            StoredRecord {
                name: "Bill".into(),
                phones: vec!["1".into()],
                birthday: Some("not a date".into()),
            },
        );
        let mut book = AddressBook::new(MemBackend::with_contacts(contacts));
        assert!(matches!(book.load(), Err(BookError::CorruptData(_))));
        assert!(book.is_empty());
    }
}
