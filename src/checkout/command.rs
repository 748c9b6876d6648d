pub mod issue_book_cmd;
pub mod issued_books_cmd;
pub mod return_book_cmd;
