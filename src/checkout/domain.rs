use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub mod service;

#[async_trait]
pub trait CheckoutService: Sync + Send {
    async fn issue_book(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn return_book(&self, isbn: &str) -> LibraryResult<BookDto>;
    // books in the order they were issued, returned ones included
    async fn issued_books(&self) -> LibraryResult<Vec<BookDto>>;
}
