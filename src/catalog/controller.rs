use tracing::debug;
use crate::accounts::session::Session;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest, SearchBookCommandResponse};
use crate::catalog::command::undo_cmd::{UndoCommand, UndoCommandRequest, UndoCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.catalog.clone(), state.publisher.clone())
}

pub(crate) async fn add_book(
    state: &AppState,
    session: &Session,
    title: &str,
    author: &str,
    isbn: &str) -> Result<AddBookCommandResponse, ServerError> {
    debug!(username = session.username.as_str(), isbn, "add book requested");
    let req = AddBookCommandRequest::new(title, author, isbn);
    let res = AddBookCommand::new(build_service(state)).execute(req).await?;
    Ok(res)
}

pub(crate) async fn list_books(
    state: &AppState,
    session: &Session) -> Result<ListBooksCommandResponse, ServerError> {
    debug!(username = session.username.as_str(), "list books requested");
    let res = ListBooksCommand::new(build_service(state)).execute(ListBooksCommandRequest::default()).await?;
    Ok(res)
}

pub(crate) async fn search_book(
    state: &AppState,
    session: &Session,
    title: &str) -> Result<SearchBookCommandResponse, ServerError> {
    debug!(username = session.username.as_str(), title, "search requested");
    let req = SearchBookCommandRequest::new(title);
    let res = SearchBookCommand::new(build_service(state)).execute(req).await?;
    Ok(res)
}

pub(crate) async fn undo(
    state: &AppState,
    session: &Session) -> Result<UndoCommandResponse, ServerError> {
    debug!(username = session.username.as_str(), "undo requested");
    let res = UndoCommand::new(build_service(state)).execute(UndoCommandRequest::default()).await?;
    Ok(res)
}

#[cfg(test)]
mod tests {
    use crate::accounts::session::Session;
    use crate::catalog::controller;
    use crate::core::controller::{AppState, ReplyStatus};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_serve_catalog_requests() {
        let state = AppState::new(Configuration::new("test"));
        let session = Session::new("alice");

        let added = controller::add_book(&state, &session, " Dune ", "Herbert", "111").await.expect("should add book");
        assert_eq!("Dune", added.book.title.as_str());
        let found = controller::search_book(&state, &session, "Dune").await.expect("should find book");
        assert_eq!("111", found.book.isbn.as_str());
        assert_eq!(1, controller::list_books(&state, &session).await.expect("should list").books.len());

        let _ = controller::undo(&state, &session).await.expect("should undo");
        let err = controller::undo(&state, &session).await.expect_err("nothing left to undo");
        assert_eq!(ReplyStatus::NotFound, err.0);
        let err = controller::add_book(&state, &session, "", "Herbert", "111").await.expect_err("title is required");
        assert_eq!(ReplyStatus::BadRequest, err.0);
    }
}
