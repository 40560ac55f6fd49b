//! # Addrbook Architecture
//!
//! Addrbook is a **UI-agnostic contact book library** with a small
//! interactive CLI on top. The library never touches the terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prints results, maps errors         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns detached views         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Contact Store (book.rs, page.rs)                           │
//! │  - AddressBook: records keyed by name, write-through saves  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: FileBackend, MemBackend            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are built from validated fields ([`fields`]) and can only be
//! changed through the book, so an invalid phone or date never reaches
//! memory or disk.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`book`]: The contact store
//! - [`page`]: Paged iteration over the book
//! - [`record`]: One contact and its birthday math
//! - [`fields`]: Validated name, phone and birthday types
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod page;
pub mod record;
pub mod store;
