use crate::book::AddressBook;
use crate::commands::{CmdResult, ContactView};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(book: &AddressBook<B>, page_size: usize) -> Result<CmdResult> {
    let pages: Vec<Vec<ContactView>> = book
        .paginate(page_size)?
        .map(|page| page.into_iter().map(ContactView::from).collect())
        .collect();
    Ok(CmdResult::default().with_pages(pages))
}
