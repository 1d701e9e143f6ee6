use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::debug;
use crate::core::command::Command;
use crate::core::library::LibraryResult;
use crate::library::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::library::command::find_books_cmd::{FindBooksCommand, FindBooksCommandRequest};
use crate::library::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::library::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::library::domain::LibraryService;

const MENU: &str = "Library Management System
1. Add Book
2. Remove Book
3. Find Book by ISBN
4. Find Book by Title
5. Find Book by Author
6. List All Books
7. List Available Books
8. Exit";

/// Interactive text menu over the library service. Reads choices from
/// `input` until `8` or end of input; failures of a single operation are
/// printed and the menu is shown again.
pub struct LibraryMenu {
    library_service: Arc<dyn LibraryService>,
}

impl LibraryMenu {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }

    pub async fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> LibraryResult<()> {
        loop {
            writeln!(output)?;
            writeln!(output, "{}", MENU)?;
            let Some(choice) = prompt(input, output, "Enter your choice: ")? else {
                return Ok(());
            };
            debug!("menu choice {}", choice);
            let proceed = match choice.parse::<u8>() {
                Ok(1) => self.add_book(input, output).await?,
                Ok(2) => self.remove_book(input, output).await?,
                Ok(3) => self.find_book_by_isbn(input, output).await?,
                Ok(4) => self.find_books_by_prompt(input, output, "Enter book title: ", FindBooksCommandRequest::Title).await?,
                Ok(5) => self.find_books_by_prompt(input, output, "Enter book author: ", FindBooksCommandRequest::Author).await?,
                Ok(6) => self.find_books(output, FindBooksCommandRequest::All).await?,
                Ok(7) => self.find_books(output, FindBooksCommandRequest::Available).await?,
                Ok(8) => false,
                _ => {
                    writeln!(output, "Invalid choice. Please try again.")?;
                    true
                }
            };
            if !proceed {
                return Ok(());
            }
        }
    }

    // Each operation returns false when the input ran out mid-way.
    async fn add_book<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> LibraryResult<bool> {
        let Some(department) = prompt(input, output, "Enter department ID: ")? else { return Ok(false) };
        let Some(isbn) = prompt(input, output, "Enter book ISBN: ")? else { return Ok(false) };
        let Some(title) = prompt(input, output, "Enter book title: ")? else { return Ok(false) };
        let Some(author) = prompt(input, output, "Enter book author: ")? else { return Ok(false) };
        let Some(genre) = prompt(input, output, "Enter book genre: ")? else { return Ok(false) };
        let Some(year) = prompt(input, output, "Enter publication year: ")? else { return Ok(false) };
        let Ok(publication_year) = year.parse::<i32>() else {
            writeln!(output, "Invalid publication year: {}", year)?;
            return Ok(true);
        };
        let Some(available) = prompt(input, output, "Is the book available (true/false): ")? else { return Ok(false) };
        let Ok(is_available) = available.to_lowercase().parse::<bool>() else {
            writeln!(output, "Invalid availability: {}", available)?;
            return Ok(true);
        };

        let mut req = AddBookCommandRequest::new(isbn.as_str(), title.as_str(), author.as_str());
        req.genre = genre;
        req.publication_year = publication_year;
        req.department = department;
        req.is_available = is_available;
        match AddBookCommand::new(Arc::clone(&self.library_service)).execute(req).await {
            Ok(_) => writeln!(output, "Book added to department.")?,
            Err(err) => writeln!(output, "{}", err)?,
        }
        Ok(true)
    }

    async fn remove_book<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> LibraryResult<bool> {
        let Some(isbn) = prompt(input, output, "Enter book ISBN to remove: ")? else { return Ok(false) };
        let req = RemoveBookCommandRequest::new(isbn.as_str());
        match RemoveBookCommand::new(Arc::clone(&self.library_service)).execute(req).await {
            Ok(res) if res.removed > 0 => writeln!(output, "Book removed.")?,
            Ok(_) => writeln!(output, "{}", GetBookCommandRequest::new(isbn.as_str()).not_found_message())?,
            Err(err) => writeln!(output, "{}", err)?,
        }
        Ok(true)
    }

    async fn find_book_by_isbn<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> LibraryResult<bool> {
        let Some(isbn) = prompt(input, output, "Enter book ISBN: ")? else { return Ok(false) };
        let req = GetBookCommandRequest::new(isbn.as_str());
        let not_found = req.not_found_message();
        match GetBookCommand::new(Arc::clone(&self.library_service)).execute(req).await {
            Ok(res) => match res.book {
                Some(book) => writeln!(output, "Book: {}", book)?,
                None => writeln!(output, "{}", not_found)?,
            },
            Err(err) => writeln!(output, "{}", err)?,
        }
        Ok(true)
    }

    async fn find_books_by_prompt<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        message: &str,
        to_request: fn(String) -> FindBooksCommandRequest) -> LibraryResult<bool> {
        let Some(value) = prompt(input, output, message)? else { return Ok(false) };
        self.find_books(output, to_request(value)).await
    }

    async fn find_books<W: Write>(&self, output: &mut W, req: FindBooksCommandRequest) -> LibraryResult<bool> {
        let not_found = req.not_found_message();
        match FindBooksCommand::new(Arc::clone(&self.library_service)).execute(req).await {
            Ok(res) if res.books.is_empty() => writeln!(output, "{}", not_found)?,
            Ok(res) => {
                for book in res.books {
                    writeln!(output, "{}", book)?;
                }
            }
            Err(err) => writeln!(output, "{}", err)?,
        }
        Ok(true)
    }
}

// Prints the prompt and reads one trimmed line, None at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> LibraryResult<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::library::domain::LibraryService;
    use crate::library::factory;
    use crate::library::menu::LibraryMenu;

    async fn build_service() -> Arc<dyn LibraryService> {
        Arc::from(factory::create_library_service(&Configuration::new("test"), RepositoryStore::InMemory).await)
    }

    async fn run_menu(svc: &Arc<dyn LibraryService>, script: &str) -> String {
        let menu = LibraryMenu::new(Arc::clone(svc));
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output: Vec<u8> = Vec::new();
        menu.run(&mut input, &mut output).await.expect("should run menu");
        String::from_utf8(output).expect("should be utf8")
    }

    const ADD_HOLMES: &str = "1\nLiterature\n978-1-56619-909-4\nThe Adventures of Sherlock Holmes\nArthur Conan Doyle\nMystery\n1892\ntrue\n";

    #[tokio::test]
    async fn test_should_add_and_list_books() {
        let svc = build_service().await;
        let out = run_menu(&svc, format!("{}6\n8\n", ADD_HOLMES).as_str()).await;
        assert!(out.contains("Book added to department."));
        assert!(out.contains("[978-1-56619-909-4] The Adventures of Sherlock Holmes by Arthur Conan Doyle (Mystery, 1892), department: Literature, available"));

        let book = svc.find_book_by_isbn("978-1-56619-909-4").await.expect("should query")
            .expect("should find book");
        assert_eq!("Literature", book.department.as_str());
        assert!(book.is_available);
    }

    #[tokio::test]
    async fn test_should_report_duplicate_isbn() {
        let svc = build_service().await;
        let out = run_menu(&svc, format!("{}{}8\n", ADD_HOLMES, ADD_HOLMES).as_str()).await;
        assert!(out.contains("Book with ISBN 978-1-56619-909-4 already exists"));
        assert_eq!(1, svc.list_all_books().await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_year() {
        let svc = build_service().await;
        let out = run_menu(&svc, "1\nD\nA1\nX\nY\nG\nlast year\n8\n").await;
        assert!(out.contains("Invalid publication year: last year"));
        assert!(svc.list_all_books().await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_find_and_remove_book() {
        let svc = build_service().await;
        let script = format!("{}3\n978-1-56619-909-4\n4\nThe Adventures of Sherlock Holmes\n5\nArthur Conan Doyle\n2\n978-1-56619-909-4\n2\n978-1-56619-909-4\n3\n978-1-56619-909-4\n8\n", ADD_HOLMES);
        let out = run_menu(&svc, script.as_str()).await;
        assert!(out.contains("Book: [978-1-56619-909-4] The Adventures of Sherlock Holmes"));
        assert_eq!(3, out.matches("[978-1-56619-909-4] The Adventures of Sherlock Holmes").count());
        assert_eq!(1, out.matches("Book removed.").count());
        assert_eq!(2, out.matches("Book with ISBN 978-1-56619-909-4 not found").count());
    }

    #[tokio::test]
    async fn test_should_print_empty_messages() {
        let svc = build_service().await;
        let out = run_menu(&svc, "6\n7\n4\nDune\n5\nFrank Herbert\n8\n").await;
        assert!(out.contains("No Books Found"));
        assert!(out.contains("No Books Available"));
        assert!(out.contains("Book with Title Dunenot found"));
        assert!(out.contains("No Books by Author Frank HerbertFound"));
    }

    #[tokio::test]
    async fn test_should_handle_invalid_choice_and_eof() {
        let svc = build_service().await;
        let out = run_menu(&svc, "abc\n9\n").await;
        assert_eq!(2, out.matches("Invalid choice. Please try again.").count());
        assert_eq!(3, out.matches("Enter your choice: ").count());
    }
}
