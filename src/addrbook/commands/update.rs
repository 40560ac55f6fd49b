use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactView};
use crate::error::Result;
use crate::store::StorageBackend;

/// Replaces an existing contact's phones with `phone`.
pub fn run<B: StorageBackend>(
    book: &mut AddressBook<B>,
    name: &str,
    phone: &str,
) -> Result<CmdResult> {
    book.update_phone(name, phone)?;
    let view = ContactView::from(book.find(name)?);

    Ok(CmdResult::default()
        .with_contacts(vec![view])
        .with_message(CmdMessage::success("Contact updated successfully!")))
}
