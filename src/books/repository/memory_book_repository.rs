use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{Predicate, Repository};

// Document map keyed by isbn; the vacant-entry check in create is atomic per key.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: DashMap<String, BookEntity>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: DashMap::new(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        match self.books.entry(entity.isbn.clone()) {
            Entry::Occupied(_) => {
                Err(LibraryError::duplicate_key(format!("book already exists for {}", entity.isbn).as_str()))
            }
            Entry::Vacant(slot) => {
                let stored = entity.with_assigned_id();
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.get(id)
            .map(|b| b.value().clone())
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        Ok(self.books.remove(id).map(|_| 1).unwrap_or(0))
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.iter().map(|b| b.value().clone()).collect())
    }

    async fn query(&self, predicate: &Predicate) -> LibraryResult<Vec<BookEntity>> {
        let mut records = vec![];
        for item in self.books.iter() {
            let doc = serde_json::to_value(item.value())?;
            if predicate.iter().all(|(k, v)| doc.get(k) == Some(v)) {
                records.push(item.value().clone());
            }
        }
        debug!("matched {} of {} books", records.len(), self.books.len());
        Ok(records)
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {}
