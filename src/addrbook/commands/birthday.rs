use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactView};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn set<B: StorageBackend>(
    book: &mut AddressBook<B>,
    name: &str,
    date: &str,
) -> Result<CmdResult> {
    book.modify(name, |record| record.set_birthday(date))?;
    let view = ContactView::from(book.find(name)?);
    Ok(CmdResult::default()
        .with_contacts(vec![view])
        .with_message(CmdMessage::success(format!(
            "Birthday set for {}",
            name
        ))))
}

/// Forgets the contact's birthday. Clearing one that was never set is a
/// no-op and does not save.
pub fn clear<B: StorageBackend>(book: &mut AddressBook<B>, name: &str) -> Result<CmdResult> {
    book.modify(name, |record| {
        record.clear_birthday();
        Ok(())
    })?;
    let view = ContactView::from(book.find(name)?);
    Ok(CmdResult::default()
        .with_contacts(vec![view])
        .with_message(CmdMessage::success(format!(
            "Birthday cleared for {}",
            name
        ))))
}

/// Contacts whose birthday falls within the next `within_days` days.
pub fn upcoming<B: StorageBackend>(book: &AddressBook<B>, within_days: u32) -> Result<CmdResult> {
    let contacts: Vec<_> = book
        .upcoming_birthdays(within_days)
        .into_iter()
        .map(|(record, _)| ContactView::from(record))
        .collect();

    let mut result = CmdResult::default();
    if contacts.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No birthdays in the next {} days",
            within_days
        )));
    }
    Ok(result.with_contacts(contacts))
}
