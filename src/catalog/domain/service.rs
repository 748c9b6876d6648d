use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::dto::BookDto;
use crate::catalog::domain::{CatalogService, SharedCatalog};
use crate::catalog::dto::UndoDto;
use crate::catalog::undo::UndoEntry;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::{publish_committed, EventPublisher};

pub(crate) struct CatalogServiceImpl {
    metadata: HashMap<String, String>,
    catalog: SharedCatalog,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, catalog: SharedCatalog,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            metadata: HashMap::from([("branch_id".to_string(), config.branch_id.to_string())]),
            catalog,
            events_publisher,
        }
    }

    fn undo_event(&self, undone: &UndoDto) -> serde_json::Result<DomainEvent> {
        match &undone.action {
            UndoEntry::AddBook { isbn } => {
                DomainEvent::deleted("book_add_undone", "catalog", isbn, &self.metadata, undone)
            }
            UndoEntry::IssueBook { isbn } => {
                DomainEvent::updated("book_issue_undone", "catalog", isbn, &self.metadata, undone)
            }
            UndoEntry::ReturnBook { isbn } => {
                DomainEvent::updated("book_return_undone", "catalog", isbn, &self.metadata, undone)
            }
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, title: &str, author: &str, isbn: &str) -> LibraryResult<BookDto> {
        let book = {
            let mut catalog = self.catalog.lock().await;
            if let Some(existing) = catalog.find_by_isbn(isbn) {
                warn!(isbn, title = existing.title.as_str(), "replacing catalog record with the same isbn");
            }
            BookDto::from(catalog.add_book(title, author, isbn))
        };
        info!(isbn, title, "book added");
        publish_committed(self.events_publisher.as_ref(),
                          DomainEvent::added("book_added", "catalog", isbn, &self.metadata, &book)).await;
        Ok(book)
    }

    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto> {
        self.catalog.lock().await.search_by_title(title).map(BookDto::from)
            .ok_or_else(|| LibraryError::not_found(format!("no book found with title: {}", title).as_str()))
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.catalog.lock().await.find_by_isbn(isbn).map(BookDto::from)
            .ok_or_else(|| LibraryError::not_found(format!("book with isbn {} not found", isbn).as_str()))
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books: Vec<BookDto> = self.catalog.lock().await.list_all().map(BookDto::from).collect();
        debug!(count = books.len(), "listed books");
        Ok(books)
    }

    async fn undo(&self) -> LibraryResult<UndoDto> {
        let undone = {
            let mut catalog = self.catalog.lock().await;
            UndoDto::from(&catalog.undo()?)
        };
        if undone.book.is_none() {
            debug!(action = %undone.action, "undo found no record to change");
        }
        if let Some(restored) = &undone.restored {
            info!(isbn = restored.isbn.as_str(), title = restored.title.as_str(), "shadowed record restored");
        }
        info!(action = %undone.action, "undo applied");
        publish_committed(self.events_publisher.as_ref(), self.undo_event(&undone)).await;
        Ok(undone)
    }
}
