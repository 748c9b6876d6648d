use std::collections::HashMap;
use crate::books::domain::model::BookId;

// IsbnIndex gives direct lookup from an ISBN to the catalog record that owns it.
#[derive(Debug, Default)]
pub struct IsbnIndex {
    entries: HashMap<String, BookId>,
}

impl IsbnIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `isbn` to `book_id`, returning the id it replaced if the ISBN was already indexed.
    pub fn insert(&mut self, isbn: &str, book_id: BookId) -> Option<BookId> {
        self.entries.insert(isbn.to_string(), book_id)
    }

    pub fn find(&self, isbn: &str) -> Option<BookId> {
        self.entries.get(isbn).copied()
    }

    /// Removing an ISBN that is not indexed is a no-op.
    pub fn remove(&mut self, isbn: &str) -> Option<BookId> {
        self.entries.remove(isbn)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::index::IsbnIndex;

    #[test]
    fn test_should_insert_and_find() {
        let mut index = IsbnIndex::new();
        assert_eq!(None, index.insert("111", 1));
        assert_eq!(None, index.insert("222", 2));
        assert_eq!(Some(1), index.find("111"));
        assert_eq!(Some(2), index.find("222"));
        assert_eq!(None, index.find("333"));
        assert_eq!(2, index.len());
    }

    #[test]
    fn test_should_overwrite_existing_isbn() {
        let mut index = IsbnIndex::new();
        index.insert("111", 1);
        assert_eq!(Some(1), index.insert("111", 5));
        assert_eq!(Some(5), index.find("111"));
        assert_eq!(1, index.len());
    }

    #[test]
    fn test_should_remove() {
        let mut index = IsbnIndex::new();
        index.insert("111", 1);
        assert_eq!(Some(1), index.remove("111"));
        assert_eq!(None, index.find("111"));
        assert_eq!(None, index.remove("111"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_should_match_whole_key() {
        let mut index = IsbnIndex::new();
        index.insert("978-0", 1);
        index.insert("978-01", 2);
        assert_eq!(Some(1), index.find("978-0"));
        index.remove("978-0");
        assert_eq!(Some(2), index.find("978-01"));
    }
}
