use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// BookEntity is the persisted document of one catalog item. The isbn is the
// business key and the table key; book_id is opaque and assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_year: i32,
    pub department: String,
    pub is_available: bool,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            book_id: String::new(),
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: String::new(),
            publication_year: 0,
            department: String::new(),
            is_available: true,
        }
    }

    // returns a copy carrying a fresh storage id unless one is already set
    pub fn with_assigned_id(&self) -> Self {
        let mut stored = self.clone();
        if stored.book_id.is_empty() {
            stored.book_id = Uuid::new_v4().to_string();
        }
        stored
    }
}

impl PartialEq for BookEntity {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for BookEntity {}

impl Hash for BookEntity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("isbn", "title", "author");
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert!(book.book_id.is_empty());
        assert!(book.is_available);
    }

    #[tokio::test]
    async fn test_should_assign_id_once() {
        let book = BookEntity::new("isbn", "title", "author").with_assigned_id();
        assert!(!book.book_id.is_empty());
        let again = book.with_assigned_id();
        assert_eq!(book.book_id, again.book_id);
    }

    #[tokio::test]
    async fn test_should_compare_by_isbn() {
        let mut first = BookEntity::new("978-0-45228-425-0", "1984", "George Orwell");
        first.book_id = "1".to_string();
        let second = BookEntity::new("978-0-45228-425-0", "Nineteen Eighty-Four", "Orwell");
        assert_eq!(first, second);
        assert_ne!(first, BookEntity::new("978-1", "1984", "George Orwell"));
    }

    #[tokio::test]
    async fn test_should_serialize_snake_case_document() {
        let val = serde_json::to_value(BookEntity::new("isbn", "title", "author")).expect("should serialize");
        assert!(val.get("publication_year").is_some());
        assert!(val.get("is_available").is_some());
        assert!(val.get("book_id").is_some());
    }
}
