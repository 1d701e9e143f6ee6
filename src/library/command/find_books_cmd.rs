use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub struct FindBooksCommand {
    library_service: Arc<dyn LibraryService>,
}

impl FindBooksCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

// One request per list-style read of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum FindBooksCommandRequest {
    All,
    Available,
    Title(String),
    Author(String),
}

impl FindBooksCommandRequest {
    // Message used in place of an empty result. The missing spaces before
    // "not found" and "Found" are part of the published API.
    pub fn not_found_message(&self) -> String {
        match self {
            FindBooksCommandRequest::All => "No Books Found".to_string(),
            FindBooksCommandRequest::Available => "No Books Available".to_string(),
            FindBooksCommandRequest::Title(title) => format!("Book with Title {}not found", title),
            FindBooksCommandRequest::Author(author) => format!("No Books by Author {}Found", author),
        }
    }
}

#[derive(Debug)]
pub struct FindBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl FindBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<FindBooksCommandRequest, FindBooksCommandResponse> for FindBooksCommand {
    async fn execute(&self, req: FindBooksCommandRequest) -> Result<FindBooksCommandResponse, CommandError> {
        let res = match req {
            FindBooksCommandRequest::All => self.library_service.list_all_books().await,
            FindBooksCommandRequest::Available => self.library_service.list_available_books().await,
            FindBooksCommandRequest::Title(title) => self.library_service.find_book_by_title(title.as_str()).await,
            FindBooksCommandRequest::Author(author) => self.library_service.find_book_by_author(author.as_str()).await,
        };
        res.map_err(CommandError::from).map(FindBooksCommandResponse::new)
    }
}
