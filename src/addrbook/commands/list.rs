use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactView};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(book: &AddressBook<B>) -> Result<CmdResult> {
    let contacts: Vec<_> = book
        .list_all()
        .map(|(_, record)| ContactView::from(record))
        .collect();

    let mut result = CmdResult::default();
    if contacts.is_empty() {
        result.add_message(CmdMessage::info("Contact list is empty!"));
    }
    Ok(result.with_contacts(contacts))
}
