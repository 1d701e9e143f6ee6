pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

/// Mediates all access to Book records. Absence is reported as `None` or an
/// empty `Vec`, never as an error; errors are repository faults only.
#[async_trait]
pub trait LibraryService: Sync + Send {
    /// Inserts the book unless its isbn is already stored, in which case
    /// `None` is returned and the existing record is left untouched.
    async fn add_book(&self, book: &BookDto) -> LibraryResult<Option<BookDto>>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>>;
    async fn list_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn list_available_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>>;
    /// Returns the number of removed records.
    async fn remove_book(&self, isbn: &str) -> LibraryResult<usize>;
}
