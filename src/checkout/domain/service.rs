use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::books::dto::BookDto;
use crate::catalog::domain::SharedCatalog;
use crate::checkout::domain::CheckoutService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::{publish_committed, EventPublisher};

pub(crate) struct CheckoutServiceImpl {
    metadata: HashMap<String, String>,
    catalog: SharedCatalog,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(config: &Configuration, catalog: SharedCatalog,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            metadata: HashMap::from([("branch_id".to_string(), config.branch_id.to_string())]),
            catalog,
            events_publisher,
        }
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn issue_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        let book = BookDto::from(self.catalog.lock().await.issue_book(isbn)?);
        info!(isbn, title = book.title.as_str(), "book issued");
        publish_committed(self.events_publisher.as_ref(),
                          DomainEvent::updated("book_issued", "checkout", isbn, &self.metadata, &book)).await;
        Ok(book)
    }

    async fn return_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        let book = BookDto::from(self.catalog.lock().await.return_book(isbn)?);
        info!(isbn, title = book.title.as_str(), "book returned");
        publish_committed(self.events_publisher.as_ref(),
                          DomainEvent::updated("book_returned", "checkout", isbn, &self.metadata, &book)).await;
        Ok(book)
    }

    async fn issued_books(&self) -> LibraryResult<Vec<BookDto>> {
        Ok(self.catalog.lock().await.issue_log().map(BookDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::{create_catalog_service, create_shared_catalog};
    use crate::checkout::domain::CheckoutService;
    use crate::checkout::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::gateway::memory::publisher::{FailingPublisher, MemoryPublisher};

    fn build_services() -> (Box<dyn CatalogService>, Box<dyn CheckoutService>, Arc<MemoryPublisher>) {
        let config = Configuration::new("test");
        let catalog = create_shared_catalog();
        let publisher = Arc::new(MemoryPublisher::new());
        (create_catalog_service(&config, catalog.clone(), publisher.clone()),
         factory::create_checkout_service(&config, catalog, publisher.clone()),
         publisher)
    }

    #[tokio::test]
    async fn test_should_issue_and_return() {
        let (catalog_svc, checkout_svc, publisher) = build_services();
        let _ = catalog_svc.add_book("Dune", "Herbert", "111").await.expect("should add book");

        let res = checkout_svc.return_book("111").await;
        assert!(matches!(res, Err(LibraryError::NotIssued { .. })));

        let issued = checkout_svc.issue_book("111").await.expect("should issue");
        assert!(!issued.available);
        let again = checkout_svc.issue_book("111").await;
        assert!(matches!(again, Err(LibraryError::AlreadyIssued { .. })));

        let returned = checkout_svc.return_book("111").await.expect("should return");
        assert!(returned.available);
        assert!(catalog_svc.find_book_by_isbn("111").await.expect("should find").available);

        let names: Vec<String> = publisher.events().await.into_iter().map(|e| e.name).collect();
        assert_eq!(vec!["book_added", "book_issued", "book_returned"], names);
    }

    #[tokio::test]
    async fn test_should_reject_unknown_isbn() {
        let (catalog_svc, checkout_svc, publisher) = build_services();
        let _ = catalog_svc.add_book("Dune", "Herbert", "111").await.expect("should add book");

        assert!(matches!(checkout_svc.issue_book("999").await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(checkout_svc.return_book("999").await, Err(LibraryError::NotFound { .. })));
        assert_eq!(1, publisher.events().await.len());
        assert!(catalog_svc.find_book_by_isbn("111").await.expect("should find").available);
    }

    #[tokio::test]
    async fn test_should_undo_issue_through_catalog() {
        let (catalog_svc, checkout_svc, _) = build_services();
        let _ = catalog_svc.add_book("Dune", "Herbert", "123").await.expect("should add book");
        let _ = catalog_svc.add_book("Atlas", "Rand", "456").await.expect("should add book");
        let _ = checkout_svc.issue_book("456").await.expect("should issue");
        let _ = checkout_svc.issue_book("123").await.expect("should issue");

        let _ = catalog_svc.undo().await.expect("should undo");
        assert!(catalog_svc.find_book_by_isbn("123").await.expect("should find").available);
        assert!(!catalog_svc.find_book_by_isbn("456").await.expect("should find").available);
    }

    #[tokio::test]
    async fn test_should_list_issued_books() {
        let (catalog_svc, checkout_svc, _) = build_services();
        assert!(checkout_svc.issued_books().await.expect("should list").is_empty());
        let _ = catalog_svc.add_book("Dune", "Herbert", "111").await.expect("should add book");
        let _ = catalog_svc.add_book("Atlas", "Rand", "222").await.expect("should add book");
        let _ = checkout_svc.issue_book("111").await.expect("should issue");
        let _ = checkout_svc.issue_book("222").await.expect("should issue");
        let isbns: Vec<String> = checkout_svc.issued_books().await.expect("should list")
            .into_iter().map(|b| b.isbn).collect();
        assert_eq!(vec!["111", "222"], isbns);
    }

    #[tokio::test]
    async fn test_should_keep_transitions_when_publish_fails() {
        let config = Configuration::new("test");
        let catalog = create_shared_catalog();
        let publisher = Arc::new(FailingPublisher::default());
        let catalog_svc = create_catalog_service(&config, catalog.clone(), publisher.clone());
        let checkout_svc = factory::create_checkout_service(&config, catalog, publisher.clone());
        let _ = catalog_svc.add_book("Dune", "Herbert", "111").await.expect("should add book");

        let issued = checkout_svc.issue_book("111").await.expect("issue should stand");
        assert!(!issued.available);
        assert!(!catalog_svc.find_book_by_isbn("111").await.expect("should find").available);
        let returned = checkout_svc.return_book("111").await.expect("return should stand");
        assert!(returned.available);
        assert_eq!(3, publisher.attempts().await);
    }
}
