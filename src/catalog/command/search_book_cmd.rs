use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchBookCommandRequest {
    pub(crate) title: String,
}

impl SearchBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchBookCommandResponse {
    pub book: BookDto,
}

#[async_trait]
impl Command<SearchBookCommandRequest, SearchBookCommandResponse> for SearchBookCommand {
    async fn execute(&self, req: SearchBookCommandRequest) -> Result<SearchBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_title(req.title.as_str())
            .await.map_err(CommandError::from).map(|book| SearchBookCommandResponse { book })
    }
}
