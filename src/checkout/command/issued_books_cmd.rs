use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub(crate) struct IssuedBooksCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl IssuedBooksCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct IssuedBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct IssuedBooksCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<IssuedBooksCommandRequest, IssuedBooksCommandResponse> for IssuedBooksCommand {
    async fn execute(&self, _req: IssuedBooksCommandRequest) -> Result<IssuedBooksCommandResponse, CommandError> {
        self.checkout_service.issued_books()
            .await.map_err(CommandError::from).map(|books| IssuedBooksCommandResponse { books })
    }
}
