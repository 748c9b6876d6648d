use std::collections::BTreeMap;
use std::ops::Bound;
use crate::books::domain::model::{BookEntity, BookId};

// TitleKey orders entries by title, then by book id so that records sharing a
// title keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct TitleKey {
    title: String,
    book_id: BookId,
}

/// Ordered index over book titles.
///
/// Duplicate titles are allowed. Among equal titles the oldest record comes
/// first, which is the one `find_exact` and `remove` act on.
#[derive(Debug, Default)]
pub struct TitleIndex {
    entries: BTreeMap<TitleKey, BookId>,
}

impl TitleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, book: &BookEntity) {
        self.entries.insert(TitleKey { title: book.title.to_string(), book_id: book.book_id }, book.book_id);
    }

    pub fn find_exact(&self, title: &str) -> Option<BookId> {
        self.first_key(title).map(|key| key.book_id)
    }

    pub fn remove(&mut self, title: &str) -> Option<BookId> {
        let key = self.first_key(title)?.clone();
        self.entries.remove(&key)
    }

    /// Removes the entry of one specific record, leaving other records with the same title in place.
    pub fn remove_entry(&mut self, title: &str, book_id: BookId) -> bool {
        self.entries.remove(&TitleKey { title: title.to_string(), book_id }).is_some()
    }

    /// In-order traversal. Each call starts a fresh pass over the index.
    pub fn iter(&self) -> impl Iterator<Item = BookId> + '_ {
        self.entries.values().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn first_key(&self, title: &str) -> Option<&TitleKey> {
        self.entries
            .range(Self::title_range(title))
            .next()
            .map(|(key, _)| key)
    }

    fn title_range(title: &str) -> (Bound<TitleKey>, Bound<TitleKey>) {
        (
            Bound::Included(TitleKey { title: title.to_string(), book_id: BookId::MIN }),
            Bound::Included(TitleKey { title: title.to_string(), book_id: BookId::MAX }),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::index::TitleIndex;

    fn book(id: u64, title: &str) -> BookEntity {
        BookEntity::new(id, title, "author", format!("isbn-{}", id).as_str())
    }

    #[test]
    fn test_should_traverse_in_title_order() {
        let mut index = TitleIndex::new();
        index.insert(&book(1, "Dune"));
        index.insert(&book(2, "Atlas"));
        index.insert(&book(3, "Mort"));
        index.insert(&book(4, "Beloved"));
        assert_eq!(vec![2, 4, 1, 3], index.iter().collect::<Vec<_>>());
        // restartable
        assert_eq!(4, index.iter().count());
    }

    #[test]
    fn test_should_compare_titles_lexicographically() {
        let mut index = TitleIndex::new();
        index.insert(&book(1, "b"));
        index.insert(&book(2, "B"));
        index.insert(&book(3, "a"));
        index.insert(&book(4, "ab"));
        assert_eq!(vec![2, 3, 4, 1], index.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_should_find_exact_title() {
        let mut index = TitleIndex::new();
        index.insert(&book(1, "Dune"));
        index.insert(&book(2, "Dune Messiah"));
        assert_eq!(Some(1), index.find_exact("Dune"));
        assert_eq!(Some(2), index.find_exact("Dune Messiah"));
        assert_eq!(None, index.find_exact("Dun"));
        assert_eq!(None, index.find_exact(""));
    }

    #[test]
    fn test_should_keep_duplicate_titles_in_insertion_order() {
        let mut index = TitleIndex::new();
        index.insert(&book(5, "Dune"));
        index.insert(&book(2, "Atlas"));
        index.insert(&book(9, "Dune"));
        assert_eq!(vec![2, 5, 9], index.iter().collect::<Vec<_>>());
        assert_eq!(Some(5), index.find_exact("Dune"));
        assert_eq!(Some(5), index.remove("Dune"));
        assert_eq!(Some(9), index.find_exact("Dune"));
    }

    #[test]
    fn test_should_remove_oldest_duplicate_by_title() {
        let mut index = TitleIndex::new();
        index.insert(&book(1, "Dune"));
        index.insert(&book(2, "Dune"));
        assert_eq!(Some(1), index.remove("Dune"));
        assert_eq!(Some(2), index.find_exact("Dune"));
        assert_eq!(Some(2), index.remove("Dune"));
        assert_eq!(None, index.remove("Dune"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_should_remove_specific_entry() {
        let mut index = TitleIndex::new();
        index.insert(&book(1, "Dune"));
        index.insert(&book(2, "Dune"));
        assert!(index.remove_entry("Dune", 2));
        assert!(!index.remove_entry("Dune", 2));
        assert_eq!(vec![1], index.iter().collect::<Vec<_>>());
        assert_eq!(1, index.len());
    }
}
