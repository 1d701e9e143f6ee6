pub mod ddb_book_repository;
pub mod memory_book_repository;

use std::collections::HashMap;
use async_trait::async_trait;
use serde_json::Value;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// Lookups the Library service needs on top of the generic repository; the
// entity key is the isbn.
#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn exists_by_isbn(&self, isbn: &str) -> LibraryResult<bool> {
        self.find_by_isbn(isbn).await.map(|b| b.is_some())
    }

    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        match self.get(isbn).await {
            Ok(book) => Ok(Some(book)),
            Err(LibraryError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn find_by_available(&self, is_available: bool) -> LibraryResult<Vec<BookEntity>> {
        self.query(&HashMap::from([("is_available".to_string(), Value::Bool(is_available))])).await
    }

    async fn find_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>> {
        self.query(&HashMap::from([("title".to_string(), Value::from(title))])).await
    }

    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>> {
        self.query(&HashMap::from([("author".to_string(), Value::from(author))])).await
    }

    async fn delete_by_isbn(&self, isbn: &str) -> LibraryResult<usize> {
        self.delete(isbn).await
    }
}
