use super::{ContactMap, StorageBackend};
use crate::error::{BookError, Result};
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the book is
/// single-threaded and the trait takes `&self`.
#[derive(Default)]
pub struct MemBackend {
    contacts: RefCell<ContactMap>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: ContactMap) -> Self {
        Self {
            contacts: RefCell::new(contacts),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// A copy of what was last saved.
    pub fn snapshot(&self) -> ContactMap {
        self.contacts.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load_contacts(&self) -> Result<ContactMap> {
        Ok(self.contacts.borrow().clone())
    }

    fn save_contacts(&self, contacts: &ContactMap) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(BookError::Persistence(io::Error::other(
                "Simulated write error",
            )));
        }
        *self.contacts.borrow_mut() = contacts.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>")
    }
}

// --- Test Fixtures ---
