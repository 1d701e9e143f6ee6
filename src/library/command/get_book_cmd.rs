use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub struct GetBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl GetBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug)]
pub struct GetBookCommandRequest {
    pub isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }

    pub fn not_found_message(&self) -> String {
        format!("Book with ISBN {} not found", self.isbn)
    }
}

#[derive(Debug)]
pub struct GetBookCommandResponse {
    pub book: Option<BookDto>,
}

impl GetBookCommandResponse {
    pub fn new(book: Option<BookDto>) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.library_service.find_book_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::library::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::library::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::library::domain::LibraryService;
    use crate::library::factory;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let svc: Arc<dyn LibraryService> = Arc::from(factory::create_library_service(&Configuration::new("test"), RepositoryStore::InMemory).await);
        let add_cmd = AddBookCommand::new(Arc::clone(&svc));
        let get_cmd = GetBookCommand::new(svc);

        let res = add_cmd.execute(AddBookCommandRequest::new("A1", "test book", "author")).await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new("A1")).await.expect("should get book");
        let book = loaded.book.expect("should find book");
        assert_eq!(res.book.id, book.id);
        assert_eq!("test book", book.title.as_str());

        let missing = get_cmd.execute(GetBookCommandRequest::new("Z9")).await.expect("should query");
        assert!(missing.book.is_none());
    }

    #[tokio::test]
    async fn test_should_build_not_found_message() {
        assert_eq!("Book with ISBN Z9 not found", GetBookCommandRequest::new("Z9").not_found_message());
    }
}
