use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactView};
use crate::error::Result;
use crate::record::Record;
use crate::store::StorageBackend;

/// Adds a contact with a single phone, replacing any contact of that name.
pub fn run<B: StorageBackend>(
    book: &mut AddressBook<B>,
    name: &str,
    phone: &str,
) -> Result<CmdResult> {
    let record = Record::create(name, &[phone], None)?;
    let replaced = book.contains(name);
    let view = ContactView::from(&record);
    book.add(record)?;

    let mut result = CmdResult::default().with_contacts(vec![view]);
    if replaced {
        result.add_message(CmdMessage::info(format!(
            "Replaced the previous entry for {}",
            name
        )));
    }
    result.add_message(CmdMessage::success("Contact added successfully!"));
    Ok(result)
}
