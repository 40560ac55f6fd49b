//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for contact operations, whatever the front end.
//!
//! It dispatches to `commands/*.rs` and returns structured
//! [`CmdResult`] values. It never prints, never formats for a terminal, and
//! holds no business logic of its own. Errors come back as [`BookError`]
//! variants so each front end can choose its own wording.
//!
//! `BookApi<B: StorageBackend>` is generic over the backend:
//! - Production: `BookApi<FileBackend>`
//! - Testing: `BookApi<MemBackend>`
//!
//! [`BookError`]: crate::error::BookError

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::store::StorageBackend;

pub struct BookApi<B: StorageBackend> {
    book: AddressBook<B>,
}

impl<B: StorageBackend> BookApi<B> {
    pub fn new(book: AddressBook<B>) -> Self {
        Self { book }
    }

    /// Opens the book held by `backend`.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self::new(AddressBook::open(backend)?))
    }

    pub fn book(&self) -> &AddressBook<B> {
        &self.book
    }

    pub fn add(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn update(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.book, name, phone)
    }

    pub fn lookup(&self, name: &str) -> Result<commands::CmdResult> {
        commands::lookup::run(&self.book, name)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.book, query)
    }

    pub fn paginate(&self, page_size: usize) -> Result<commands::CmdResult> {
        commands::page::run(&self.book, page_size)
    }

    pub fn delete(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::phones::add(&mut self.book, name, phone)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::phones::remove(&mut self.book, name, phone)
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<commands::CmdResult> {
        commands::phones::edit(&mut self.book, name, old, new)
    }

    pub fn set_birthday(&mut self, name: &str, date: &str) -> Result<commands::CmdResult> {
        commands::birthday::set(&mut self.book, name, date)
    }

    pub fn clear_birthday(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::clear(&mut self.book, name)
    }

    pub fn birthdays(&self, within_days: u32) -> Result<commands::CmdResult> {
        commands::birthday::upcoming(&self.book, within_days)
    }
}

pub use commands::{CmdMessage, CmdResult, ContactView, MessageLevel};
