use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub(crate) struct IssueBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl IssueBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueBookCommandRequest {
    isbn: String,
}

impl IssueBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct IssueBookCommandResponse {
    pub book: BookDto,
}

impl IssueBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand {
    async fn execute(&self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        self.checkout_service.issue_book(req.isbn.as_str())
            .await.map_err(CommandError::from).map(IssueBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory::{create_catalog_service, create_shared_catalog};
    use crate::checkout::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_run_issue_book() {
        let config = Configuration::new("test");
        let catalog = create_shared_catalog();
        let publisher = Arc::new(MemoryPublisher::new());
        let book_cmd = AddBookCommand::new(create_catalog_service(&config, catalog.clone(), publisher.clone()));
        let issue_cmd = IssueBookCommand::new(create_checkout_service(&config, catalog, publisher));

        let _ = book_cmd.execute(AddBookCommandRequest::new("Dune", "Herbert", "111"))
            .await.expect("should add book");
        let res = issue_cmd.execute(IssueBookCommandRequest::new("111")).await.expect("should issue book");
        assert!(!res.book.available);
        let again = issue_cmd.execute(IssueBookCommandRequest::new("111")).await;
        assert!(matches!(again, Err(CommandError::Conflict { .. })));
        let missing = issue_cmd.execute(IssueBookCommandRequest::new("999")).await;
        assert!(matches!(missing, Err(CommandError::NotFound { .. })));
    }
}
