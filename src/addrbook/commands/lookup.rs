use crate::book::AddressBook;
use crate::commands::{CmdResult, ContactView};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(book: &AddressBook<B>, name: &str) -> Result<CmdResult> {
    let record = book.find(name)?;
    Ok(CmdResult::default().with_contacts(vec![ContactView::from(record)]))
}
