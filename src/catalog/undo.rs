use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// UndoEntry remembers the kind of a mutation and the ISBN it touched, nothing more.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum UndoEntry {
    AddBook { isbn: String },
    IssueBook { isbn: String },
    ReturnBook { isbn: String },
}

impl UndoEntry {
    pub fn add_book(isbn: &str) -> Self {
        UndoEntry::AddBook { isbn: isbn.to_string() }
    }

    pub fn issue_book(isbn: &str) -> Self {
        UndoEntry::IssueBook { isbn: isbn.to_string() }
    }

    pub fn return_book(isbn: &str) -> Self {
        UndoEntry::ReturnBook { isbn: isbn.to_string() }
    }
}

impl Display for UndoEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            UndoEntry::AddBook { isbn } => write!(f, "book addition {}", isbn),
            UndoEntry::IssueBook { isbn } => write!(f, "book issue {}", isbn),
            UndoEntry::ReturnBook { isbn } => write!(f, "book return {}", isbn),
        }
    }
}

/// Stack of reversible catalog actions. Depth is unbounded, each undo pops one.
#[derive(Debug, Default)]
pub struct UndoLog {
    entries: Vec<UndoEntry>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: UndoEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&UndoEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
