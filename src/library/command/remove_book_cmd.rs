use std::sync::Arc;
use async_trait::async_trait;
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub struct RemoveBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl RemoveBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug)]
pub struct RemoveBookCommandRequest {
    pub isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct RemoveBookCommandResponse {
    pub removed: usize,
}

impl RemoveBookCommandResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            removed,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.library_service.remove_book(req.isbn.as_str()).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::library::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::library::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::library::domain::LibraryService;
    use crate::library::factory;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc: Arc<dyn LibraryService> = Arc::from(factory::create_library_service(&Configuration::new("test"), RepositoryStore::InMemory).await);
        let add_cmd = AddBookCommand::new(Arc::clone(&svc));
        let remove_cmd = RemoveBookCommand::new(svc);

        let _ = add_cmd.execute(AddBookCommandRequest::new("A1", "test book", "author"))
            .await.expect("should add book");
        let res = remove_cmd.execute(RemoveBookCommandRequest::new("A1")).await.expect("should remove book");
        assert_eq!(1, res.removed);
        let res = remove_cmd.execute(RemoveBookCommandRequest::new("A1")).await.expect("should remove nothing");
        assert_eq!(0, res.removed);
    }
}
