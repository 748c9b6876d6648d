use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};
use crate::accounts::controller as accounts_controller;
use crate::accounts::session::Session;
use crate::books::dto::BookDto;
use crate::catalog::controller as catalog_controller;
use crate::checkout::controller as checkout_controller;
use crate::core::controller::{AppState, ReplyStatus, ServerError};
use crate::core::library::LibraryResult;

const HEADING: &str = "Library Management System";

const TOP_MENU: &str = "1. Sign up\n\
2. Login\n\
3. Exit\n\
what operation would you like to perform?: ";

const LIBRARY_MENU: &str = "\nLibrary Menu:\n\
1. Add Book\n\
2. Display All Books\n\
3. Search Book by Title\n\
4. Issue Book\n\
5. Return Book\n\
6. Undo\n\
7. Logout\n\
8. Show Issued Books\n\
Enter choice: ";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Flow {
    Continue,
    Logout,
    EndOfInput,
}

/// Line-oriented menu shell over any buffered reader and writer.
///
/// Reaching the end of input at any prompt ends the shell cleanly, signing
/// out the active session first.
pub struct Shell<R, W> {
    state: AppState,
    reader: R,
    writer: W,
}

impl<R, W> Shell<R, W> where R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin {
    pub fn new(state: AppState, reader: R, writer: W) -> Self {
        Self {
            state,
            reader,
            writer,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub async fn run(&mut self) -> LibraryResult<()> {
        self.write_line(HEADING).await?;
        loop {
            let Some(choice) = self.prompt(TOP_MENU).await? else {
                break;
            };
            let flow = match parse_choice(&choice) {
                Some(1) => self.sign_up().await?,
                Some(2) => self.login().await?,
                Some(3) => {
                    self.write_line("Exiting.......!").await?;
                    break;
                }
                _ => {
                    self.write_line("Invalid option!").await?;
                    Flow::Continue
                }
            };
            if flow == Flow::EndOfInput {
                break;
            }
        }
        debug!("console closed");
        Ok(())
    }

    async fn sign_up(&mut self) -> LibraryResult<Flow> {
        let Some(username) = self.prompt("Enter username: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(password) = self.prompt("Enter password: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        match accounts_controller::register_user(&self.state, &username, &password).await {
            Ok(_) => self.write_line("User registered successfully!").await?,
            Err(err) => self.report(err).await?,
        }
        Ok(Flow::Continue)
    }

    async fn login(&mut self) -> LibraryResult<Flow> {
        let Some(username) = self.prompt("Enter username: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(password) = self.prompt("Enter password: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        match accounts_controller::login_user(&self.state, &username, &password).await {
            Ok(session) => {
                self.write_line(format!("Login successful! Welcome, {}.", session.username).as_str()).await?;
                self.library_menu(session).await
            }
            Err(err) => {
                self.report(err).await?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn library_menu(&mut self, session: Session) -> LibraryResult<Flow> {
        self.write_line(HEADING).await?;
        loop {
            let Some(choice) = self.prompt(LIBRARY_MENU).await? else {
                self.sign_out(session).await?;
                return Ok(Flow::EndOfInput);
            };
            let flow = match parse_choice(&choice) {
                Some(1) => self.add_book(&session).await?,
                Some(2) => self.display_books(&session).await?,
                Some(3) => self.search_book(&session).await?,
                Some(4) => self.issue_book(&session).await?,
                Some(5) => self.return_book(&session).await?,
                Some(6) => self.undo(&session).await?,
                Some(7) => Flow::Logout,
                Some(8) => self.display_issued(&session).await?,
                _ => {
                    self.write_line("Invalid choice, please try again.").await?;
                    Flow::Continue
                }
            };
            if flow != Flow::Continue {
                self.sign_out(session).await?;
                return Ok(flow);
            }
        }
    }

    async fn sign_out(&mut self, session: Session) -> LibraryResult<()> {
        let username = session.username.clone();
        match accounts_controller::logout_user(&self.state, session).await {
            Ok(_) => self.write_line(format!("User {} logged out successfully.", username).as_str()).await,
            Err(err) => self.report(err).await,
        }
    }

    async fn add_book(&mut self, session: &Session) -> LibraryResult<Flow> {
        let Some(title) = self.prompt("Enter title: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(author) = self.prompt("Enter author: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(isbn) = self.prompt("Enter ISBN: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        match catalog_controller::add_book(&self.state, session, &title, &author, &isbn).await {
            Ok(_) => self.write_line("Book added successfully!").await?,
            Err(err) => self.report(err).await?,
        }
        Ok(Flow::Continue)
    }

    async fn display_books(&mut self, session: &Session) -> LibraryResult<Flow> {
        match catalog_controller::list_books(&self.state, session).await {
            Ok(res) if res.is_empty() => self.write_line("No books available in the library.").await?,
            Ok(res) => {
                self.write_line("Books in the library:").await?;
                for book in &res.books {
                    self.write_line(format_book(book).as_str()).await?;
                }
            }
            Err(err) => self.report(err).await?,
        }
        Ok(Flow::Continue)
    }

    async fn search_book(&mut self, session: &Session) -> LibraryResult<Flow> {
        let Some(title) = self.prompt("Enter title to search: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        match catalog_controller::search_book(&self.state, session, &title).await {
            Ok(res) => {
                self.write_line("Book Found:").await?;
                self.write_line(format_book(&res.book).as_str()).await?;
            }
            Err(err) => self.report(err).await?,
        }
        Ok(Flow::Continue)
    }

    async fn issue_book(&mut self, session: &Session) -> LibraryResult<Flow> {
        let Some(isbn) = self.prompt("Enter ISBN to issue: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        match checkout_controller::issue_book(&self.state, session, &isbn).await {
            Ok(_) => self.write_line("Book issued successfully!").await?,
            Err(err) => self.report(err).await?,
        }
        Ok(Flow::Continue)
    }

    async fn return_book(&mut self, session: &Session) -> LibraryResult<Flow> {
        let Some(isbn) = self.prompt("Enter ISBN to return: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        match checkout_controller::return_book(&self.state, session, &isbn).await {
            Ok(_) => self.write_line("Book returned successfully!").await?,
            Err(err) => self.report(err).await?,
        }
        Ok(Flow::Continue)
    }

    async fn undo(&mut self, session: &Session) -> LibraryResult<Flow> {
        match catalog_controller::undo(&self.state, session).await {
            Ok(res) => self.write_line(format!("{}.", res.undone.description).as_str()).await?,
            Err(err) => self.report(err).await?,
        }
        Ok(Flow::Continue)
    }

    async fn display_issued(&mut self, session: &Session) -> LibraryResult<Flow> {
        match checkout_controller::issued_books(&self.state, session).await {
            Ok(res) if res.books.is_empty() => self.write_line("No books have been issued.").await?,
            Ok(res) => {
                self.write_line("Issued books:").await?;
                for book in &res.books {
                    self.write_line(format_book(book).as_str()).await?;
                }
            }
            Err(err) => self.report(err).await?,
        }
        Ok(Flow::Continue)
    }

    async fn report(&mut self, err: ServerError) -> LibraryResult<()> {
        let (status, message) = err;
        if status == ReplyStatus::InternalError {
            warn!(message = message.as_str(), "request failed");
        }
        self.write_line(format!("{}.", capitalize(&message)).as_str()).await
    }

    async fn prompt(&mut self, label: &str) -> LibraryResult<Option<String>> {
        self.writer.write_all(label.as_bytes()).await?;
        self.writer.flush().await?;
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    async fn write_line(&mut self, text: &str) -> LibraryResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

pub fn format_book(book: &BookDto) -> String {
    format!("Title: {}, Author: {}, ISBN: {}, Available: {}",
            book.title, book.author, book.isbn, if book.available { "Yes" } else { "No" })
}

fn parse_choice(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok()
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
