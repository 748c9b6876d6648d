pub mod model;
pub mod service;

use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::books::dto::BookDto;
use crate::catalog::domain::model::Catalog;
use crate::catalog::dto::UndoDto;
use crate::core::library::LibraryResult;

// SharedCatalog is the single catalog instance behind every service. The mutex
// serializes add, issue, return and undo.
pub type SharedCatalog = Arc<Mutex<Catalog>>;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, title: &str, author: &str, isbn: &str) -> LibraryResult<BookDto>;
    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn undo(&self) -> LibraryResult<UndoDto>;
}
