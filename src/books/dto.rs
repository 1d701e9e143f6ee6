use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

// BookDto is a data transfer object for the Library service and the REST API.
// Equality and hashing only consider the isbn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub isbn: String,
    pub author: String,
    pub genre: String,
    pub publication_year: i32,
    pub department: String,
    pub is_available: bool,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str) -> BookDto {
        BookDto {
            id: None,
            title: title.to_string(),
            isbn: isbn.to_string(),
            author: author.to_string(),
            genre: String::new(),
            publication_year: 0,
            department: String::new(),
            is_available: true,
        }
    }
}

impl PartialEq for BookDto {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for BookDto {}

impl Hash for BookDto {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[{}] {} by {} ({}, {}), department: {}, {}",
               self.isbn, self.title, self.author, self.genre, self.publication_year, self.department,
               if self.is_available { "available" } else { "not available" })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use serde_json::json;
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("isbn", "title", "author");
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!(None, book.id);
    }

    #[tokio::test]
    async fn test_should_compare_by_isbn_only() {
        let first = BookDto::new("A1", "X", "someone");
        let mut second = BookDto::new("A1", "Y", "someone else");
        second.id = Some("42".to_string());
        second.is_available = false;
        assert_eq!(first, second);

        let set: HashSet<BookDto> = HashSet::from([first, second]);
        assert_eq!(1, set.len());
    }

    #[tokio::test]
    async fn test_should_use_camel_case_json() {
        let mut book = BookDto::new("978-1-56619-909-4", "The Adventures of Sherlock Holmes", "Arthur Conan Doyle");
        book.publication_year = 1892;
        let val = serde_json::to_value(&book).expect("should serialize");
        assert_eq!(json!(1892), val["publicationYear"]);
        assert_eq!(json!(true), val["isAvailable"]);
        assert_eq!(json!(null), val["id"]);
    }

    #[tokio::test]
    async fn test_should_parse_without_id() {
        let book: BookDto = serde_json::from_value(json!({
            "isbn": "978-0-45228-425-0", "title": "1984", "author": "George Orwell", "genre": "Dystopian",
            "publicationYear": 1949, "department": "Literature", "isAvailable": true
        })).expect("should parse");
        assert_eq!(None, book.id);
        assert_eq!(1949, book.publication_year);
    }

    #[tokio::test]
    async fn test_should_display_book() {
        let book = BookDto::new("A1", "X", "Y");
        assert!(book.to_string().starts_with("[A1] X by Y"));
    }
}
