use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactView};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(book: &AddressBook<B>, query: &str) -> Result<CmdResult> {
    let contacts: Vec<_> = book
        .search(query)
        .into_iter()
        .map(ContactView::from)
        .collect();

    let mut result = CmdResult::default();
    if contacts.is_empty() {
        result.add_message(CmdMessage::info(format!("No contacts match '{}'", query)));
    }
    Ok(result.with_contacts(contacts))
}
