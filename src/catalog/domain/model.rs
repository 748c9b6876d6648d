use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, BookId};
use crate::books::index::{IsbnIndex, TitleIndex};
use crate::catalog::undo::{UndoEntry, UndoLog};
use crate::checkout::queue::IssueQueue;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

// UndoOutcome describes the action an undo reversed and the record it touched,
// if that record still existed. Undoing an add that had replaced an older
// record with the same ISBN brings that record back as `restored`.
#[derive(Debug, Clone, PartialEq)]
pub struct UndoOutcome {
    pub entry: UndoEntry,
    pub book: Option<BookEntity>,
    pub restored: Option<BookEntity>,
}

impl Display for UndoOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (&self.book, &self.restored) {
            (None, _) => write!(f, "Undo: last {} had no record left to change", self.entry),
            (Some(_), Some(restored)) => write!(f, "Undo: last {} undone, restored {}", self.entry, restored.title),
            (Some(_), None) => write!(f, "Undo: last {} undone", self.entry),
        }
    }
}

/// In-memory catalog of book records.
///
/// The catalog owns every [`BookEntity`] in an arena keyed by [`BookId`]. The
/// title index, the ISBN index and the issue queue only hold ids, so a status
/// change made through one path is seen by all of them. Both indexes always
/// contain the same set of records.
///
/// Adding a record whose ISBN is already indexed moves the older record out of
/// both indexes into a per-ISBN shadow stack. Undoing the newer add puts it back.
#[derive(Debug, Default)]
pub struct Catalog {
    books: HashMap<BookId, BookEntity>,
    next_book_id: BookId,
    title_index: TitleIndex,
    isbn_index: IsbnIndex,
    shadowed: HashMap<String, Vec<BookEntity>>,
    issue_queue: IssueQueue<BookId>,
    undo_log: UndoLog,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new available record. An existing record with the same ISBN is
    /// shadowed until this add is undone.
    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> &BookEntity {
        let book_id = self.next_book_id;
        self.next_book_id = self.next_book_id.saturating_add(1);
        let book = BookEntity::new(book_id, title, author, isbn);
        self.title_index.insert(&book);
        if let Some(displaced) = self.isbn_index.insert(isbn, book_id) {
            if let Some(older) = self.discard(displaced) {
                self.shadowed.entry(isbn.to_string()).or_default().push(older);
            }
        }
        self.undo_log.push(UndoEntry::add_book(isbn));
        self.books.entry(book_id).or_insert(book)
    }

    pub fn search_by_title(&self, title: &str) -> Option<&BookEntity> {
        self.title_index.find_exact(title).and_then(|id| self.books.get(&id))
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<&BookEntity> {
        self.isbn_index.find(isbn).and_then(|id| self.books.get(&id))
    }

    /// All records in ascending title order.
    pub fn list_all(&self) -> impl Iterator<Item = &BookEntity> + '_ {
        self.title_index.iter().filter_map(move |id| self.books.get(&id))
    }

    /// Records in the order they were issued. Returned books stay in the log.
    pub fn issue_log(&self) -> impl Iterator<Item = &BookEntity> + '_ {
        self.issue_queue.iter().filter_map(move |id| self.books.get(id))
    }

    pub fn issue_book(&mut self, isbn: &str) -> LibraryResult<&BookEntity> {
        let book = Self::lookup_mut(&self.isbn_index, &mut self.books, isbn)?;
        if !book.is_available() {
            return Err(LibraryError::already_issued("book is not available", isbn));
        }
        book.set_status(BookStatus::CheckedOut);
        self.issue_queue.enqueue(book.book_id);
        self.undo_log.push(UndoEntry::issue_book(isbn));
        Ok(book)
    }

    pub fn return_book(&mut self, isbn: &str) -> LibraryResult<&BookEntity> {
        let book = Self::lookup_mut(&self.isbn_index, &mut self.books, isbn)?;
        if book.is_available() {
            return Err(LibraryError::not_issued("book was not issued, so it cannot be returned", isbn));
        }
        book.set_status(BookStatus::Available);
        self.undo_log.push(UndoEntry::return_book(isbn));
        Ok(book)
    }

    /// Reverses the most recent mutation.
    ///
    /// Issue and return are reversed by overwriting the availability flag
    /// without checking what it currently is. Reversing an add whose record is
    /// already gone does nothing.
    pub fn undo(&mut self) -> LibraryResult<UndoOutcome> {
        let entry = self.undo_log.pop()
            .ok_or_else(|| LibraryError::nothing_to_undo("no actions to undo"))?;
        let (book, restored) = match &entry {
            UndoEntry::AddBook { isbn } => {
                let book = self.remove_book(isbn);
                let restored = book.as_ref().and_then(|_| self.restore_shadowed(isbn));
                (book, restored)
            }
            UndoEntry::IssueBook { isbn } => {
                (self.overwrite_status(isbn, BookStatus::Available), None)
            }
            UndoEntry::ReturnBook { isbn } => {
                (self.overwrite_status(isbn, BookStatus::CheckedOut), None)
            }
        };
        Ok(UndoOutcome { entry, book, restored })
    }

    pub fn len(&self) -> usize {
        self.isbn_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.isbn_index.is_empty()
    }

    fn lookup_mut<'a>(isbn_index: &IsbnIndex, books: &'a mut HashMap<BookId, BookEntity>,
                      isbn: &str) -> LibraryResult<&'a mut BookEntity> {
        isbn_index.find(isbn)
            .and_then(|id| books.get_mut(&id))
            .ok_or_else(|| LibraryError::not_found(format!("book with isbn {} not found", isbn).as_str()))
    }

    fn remove_book(&mut self, isbn: &str) -> Option<BookEntity> {
        let book_id = self.isbn_index.remove(isbn)?;
        self.discard(book_id)
    }

    // Drops a record from the arena and its title entry. The ISBN entry is the caller's concern.
    fn discard(&mut self, book_id: BookId) -> Option<BookEntity> {
        let book = self.books.remove(&book_id)?;
        self.title_index.remove_entry(book.title.as_str(), book_id);
        Some(book)
    }

    // Puts the most recently shadowed record for `isbn` back into the arena and both indexes.
    fn restore_shadowed(&mut self, isbn: &str) -> Option<BookEntity> {
        let stack = self.shadowed.get_mut(isbn)?;
        let book = stack.pop()?;
        if stack.is_empty() {
            self.shadowed.remove(isbn);
        }
        self.title_index.insert(&book);
        self.isbn_index.insert(isbn, book.book_id);
        self.books.insert(book.book_id, book.clone());
        Some(book)
    }

    fn overwrite_status(&mut self, isbn: &str, status: BookStatus) -> Option<BookEntity> {
        let book = Self::lookup_mut(&self.isbn_index, &mut self.books, isbn).ok()?;
        book.set_status(status);
        Some(book.clone())
    }
}
