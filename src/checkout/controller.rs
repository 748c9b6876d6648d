use tracing::debug;
use crate::accounts::session::Session;
use crate::checkout::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest, IssueBookCommandResponse};
use crate::checkout::command::issued_books_cmd::{IssuedBooksCommand, IssuedBooksCommandRequest, IssuedBooksCommandResponse};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

fn build_service(state: &AppState) -> Box<dyn CheckoutService> {
    factory::create_checkout_service(&state.config, state.catalog.clone(), state.publisher.clone())
}

pub(crate) async fn issue_book(
    state: &AppState,
    session: &Session,
    isbn: &str) -> Result<IssueBookCommandResponse, ServerError> {
    debug!(username = session.username.as_str(), isbn, "issue requested");
    let res = IssueBookCommand::new(build_service(state)).execute(IssueBookCommandRequest::new(isbn)).await?;
    Ok(res)
}

pub(crate) async fn return_book(
    state: &AppState,
    session: &Session,
    isbn: &str) -> Result<ReturnBookCommandResponse, ServerError> {
    debug!(username = session.username.as_str(), isbn, "return requested");
    let res = ReturnBookCommand::new(build_service(state)).execute(ReturnBookCommandRequest::new(isbn)).await?;
    Ok(res)
}

pub(crate) async fn issued_books(
    state: &AppState,
    session: &Session) -> Result<IssuedBooksCommandResponse, ServerError> {
    debug!(username = session.username.as_str(), "issued books requested");
    let res = IssuedBooksCommand::new(build_service(state)).execute(IssuedBooksCommandRequest::default()).await?;
    Ok(res)
}
