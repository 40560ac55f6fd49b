//! Edits to a single contact's phone list.

use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactView};
use crate::error::Result;
use crate::store::StorageBackend;

fn contact_result<B: StorageBackend>(book: &AddressBook<B>, name: &str) -> Result<CmdResult> {
    let view = ContactView::from(book.find(name)?);
    Ok(CmdResult::default().with_contacts(vec![view]))
}

/// Appends `phone` to the contact's list.
pub fn add<B: StorageBackend>(
    book: &mut AddressBook<B>,
    name: &str,
    phone: &str,
) -> Result<CmdResult> {
    book.modify(name, |record| record.add_phone(phone))?;
    Ok(contact_result(book, name)?
        .with_message(CmdMessage::success(format!("Phone added to {}", name))))
}

/// Drops the first matching phone. A phone the contact does not have is a
/// warning, not an error.
pub fn remove<B: StorageBackend>(
    book: &mut AddressBook<B>,
    name: &str,
    phone: &str,
) -> Result<CmdResult> {
    let removed = book.modify(name, |record| Ok(record.remove_phone(phone)))?;
    let message = if removed {
        CmdMessage::success(format!("Phone removed from {}", name))
    } else {
        CmdMessage::warning(format!("{} has no phone {}", name, phone))
    };
    Ok(contact_result(book, name)?.with_message(message))
}

pub fn edit<B: StorageBackend>(
    book: &mut AddressBook<B>,
    name: &str,
    old: &str,
    new: &str,
) -> Result<CmdResult> {
    let replaced = book.modify(name, |record| record.edit_phone(old, new))?;
    let message = if replaced {
        CmdMessage::success(format!("Phone updated for {}", name))
    } else {
        CmdMessage::warning(format!("{} has no phone {}", name, old))
    };
    Ok(contact_result(book, name)?.with_message(message))
}
