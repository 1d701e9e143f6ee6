use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub struct AddBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl AddBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

// Body of POST /api/books/add; only the isbn is required and a client
// supplied id is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookCommandRequest {
    #[serde(default)]
    pub title: String,
    pub isbn: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub publication_year: i32,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub is_available: bool,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            isbn: isbn.to_string(),
            author: author.to_string(),
            genre: String::new(),
            publication_year: 0,
            department: String::new(),
            is_available: true,
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto {
            id: None,
            title: self.title.to_string(),
            isbn: self.isbn.to_string(),
            author: self.author.to_string(),
            genre: self.genre.to_string(),
            publication_year: self.publication_year,
            department: self.department.to_string(),
            is_available: self.is_available,
        }
    }

    pub fn conflict_message(&self) -> String {
        format!("Book with ISBN {} already exists", self.isbn)
    }
}

#[derive(Debug)]
pub struct AddBookCommandResponse {
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
        let book = req.build_book();
        match self.library_service.add_book(&book).await? {
            Some(stored) => Ok(AddBookCommandResponse::new(stored)),
            None => Err(CommandError::duplicate_key(req.conflict_message().as_str())),
        }
    }
}
