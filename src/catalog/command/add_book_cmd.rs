use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            isbn: isbn.trim().to_string(),
        }
    }

    fn validate(&self) -> Result<(), CommandError> {
        if self.title.is_empty() {
            return Err(CommandError::Validation { message: "title is required".to_string(), reason_code: Some("400".to_string()) });
        }
        if self.isbn.is_empty() {
            return Err(CommandError::Validation { message: "isbn is required".to_string(), reason_code: Some("400".to_string()) });
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        req.validate()?;
        self.catalog_service.add_book(req.title.as_str(), req.author.as_str(), req.isbn.as_str())
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::memory::publisher::MemoryPublisher;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"),
                    factory::create_shared_catalog(), Arc::new(MemoryPublisher::new()));
                AddBookCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(AddBookCommandRequest::new(" Dune ", "Herbert", "111"))
            .await.expect("should add book");
        assert_eq!("Dune", res.book.title.as_str());
        assert!(res.book.available);
    }

    #[tokio::test]
    async fn test_should_reject_blank_fields() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(AddBookCommandRequest::new("  ", "Herbert", "111")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
        let res = cmd.execute(AddBookCommandRequest::new("Dune", "Herbert", "")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_parse_request() {
        let req: AddBookCommandRequest = serde_json::from_str(r#"{"title":"Dune","author":"Herbert","isbn":"111"}"#)
            .expect("should parse");
        assert_eq!("111", req.isbn.as_str());
    }
}
