use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactView};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(book: &mut AddressBook<B>, name: &str) -> Result<CmdResult> {
    let removed = book.remove(name)?;
    Ok(CmdResult::default()
        .with_contacts(vec![ContactView::from(&removed)])
        .with_message(CmdMessage::success(format!("Contact deleted: {}", name))))
}
