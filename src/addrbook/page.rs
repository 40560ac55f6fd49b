use crate::record::Record;
use std::collections::btree_map;
use std::iter::FusedIterator;

/// A bounded run of records, in book order.
pub type Page<'a> = Vec<&'a Record>;

/// Cursor over a book's records in pages of at most `page_size`.
///
/// Holds a shared borrow of the book, so the book cannot change while pages
/// are being read. Ask the book for a new cursor to start over.
pub struct Pages<'a> {
    records: btree_map::Values<'a, String, Record>,
    page_size: usize,
}

impl<'a> Pages<'a> {
    /// `page_size` must be non-zero; the book checks this before building one.
    pub(crate) fn new(records: btree_map::Values<'a, String, Record>, page_size: usize) -> Self {
        Self { records, page_size }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Page<'a> = self.records.by_ref().take(self.page_size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.records.len().div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
