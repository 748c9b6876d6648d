use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::model::UndoOutcome;
use crate::catalog::undo::UndoEntry;

// UndoDto reports which action an undo reversed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndoDto {
    pub action: UndoEntry,
    pub description: String,
    pub book: Option<BookDto>,
    pub restored: Option<BookDto>,
}

impl From<&UndoOutcome> for UndoDto {
    fn from(other: &UndoOutcome) -> Self {
        Self {
            action: other.entry.clone(),
            description: other.to_string(),
            book: other.book.as_ref().map(BookDto::from),
            restored: other.restored.as_ref().map(BookDto::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::model::UndoOutcome;
    use crate::catalog::dto::UndoDto;
    use crate::catalog::undo::UndoEntry;

    #[tokio::test]
    async fn test_should_build_from_outcome() {
        let outcome = UndoOutcome {
            entry: UndoEntry::add_book("111"),
            book: Some(BookEntity::new(1, "Dune", "Herbert", "111")),
            restored: None,
        };
        let dto = UndoDto::from(&outcome);
        assert_eq!(UndoEntry::add_book("111"), dto.action);
        assert_eq!("Undo: last book addition 111 undone", dto.description.as_str());
        assert_eq!(Some("Dune".to_string()), dto.book.map(|b| b.title));
    }

    #[tokio::test]
    async fn test_should_describe_restored_record() {
        let outcome = UndoOutcome {
            entry: UndoEntry::add_book("111"),
            book: Some(BookEntity::new(2, "Atlas", "Rand", "111")),
            restored: Some(BookEntity::new(1, "Dune", "Herbert", "111")),
        };
        let dto = UndoDto::from(&outcome);
        assert_eq!("Undo: last book addition 111 undone, restored Dune", dto.description.as_str());
        assert_eq!(Some("Dune".to_string()), dto.restored.map(|b| b.title));
    }

    #[tokio::test]
    async fn test_should_describe_undo_without_record() {
        let outcome = UndoOutcome {
            entry: UndoEntry::add_book("111"),
            book: None,
            restored: None,
        };
        let dto = UndoDto::from(&outcome);
        assert_eq!("Undo: last book addition 111 had no record left to change", dto.description.as_str());
        assert!(dto.book.is_none());
    }
}
