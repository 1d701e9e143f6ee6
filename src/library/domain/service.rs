use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::library::domain::LibraryService;

pub(crate) struct LibraryServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
}

impl LibraryServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
        }
    }
}

#[async_trait]
impl LibraryService for LibraryServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<Option<BookDto>> {
        if self.book_repository.exists_by_isbn(book.isbn.as_str()).await? {
            warn!(isbn = book.isbn.as_str(), branch = self.branch_id.as_str(), "book already exists");
            return Ok(None);
        }
        // the store key enforces uniqueness, a concurrent insert surfaces here as DuplicateKey
        match self.book_repository.create(&BookEntity::from(book)).await {
            Ok(stored) => {
                info!(isbn = stored.isbn.as_str(), book_id = stored.book_id.as_str(),
                    branch = self.branch_id.as_str(), "added book");
                Ok(Some(BookDto::from(&stored)))
            }
            Err(LibraryError::DuplicateKey { message }) => {
                warn!(isbn = book.isbn.as_str(), "lost insert race: {}", message);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        debug!(isbn, "find book by isbn");
        let res = self.book_repository.find_by_isbn(isbn).await?;
        Ok(res.as_ref().map(BookDto::from))
    }

    async fn list_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        debug!("list all books");
        let res = self.book_repository.find_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn list_available_books(&self) -> LibraryResult<Vec<BookDto>> {
        debug!("list available books");
        let res = self.book_repository.find_by_available(true).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        debug!(title, "find books by title");
        let res = self.book_repository.find_by_title(title).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>> {
        debug!(author, "find books by author");
        let res = self.book_repository.find_by_author(author).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<usize> {
        let removed = self.book_repository.delete_by_isbn(isbn).await?;
        info!(isbn, removed, branch = self.branch_id.as_str(), "removed book");
        Ok(removed)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: if other.book_id.is_empty() { None } else { Some(other.book_id.to_string()) },
            title: other.title.to_string(),
            isbn: other.isbn.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            publication_year: other.publication_year,
            department: other.department.to_string(),
            is_available: other.is_available,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.id.clone().unwrap_or_default(),
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            publication_year: other.publication_year,
            department: other.department.to_string(),
            is_available: other.is_available,
        }
    }
}
