use axum::{
    body::HttpBody,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    BoxError,
    Router,
};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::books::dto::BookDto;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::library::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::library::command::find_books_cmd::{FindBooksCommand, FindBooksCommandRequest};
use crate::library::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::library::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};

const ADD_SEGMENT: &str = "add";
const AVAILABLE_SEGMENT: &str = "available";

/// Routes of the books API. Access is not restricted: the CORS layer is
/// permissive and there is no authentication.
///
/// The request body type is left to the caller, so the same routes serve
/// both `axum::Server` and `lambda_http::run`.
pub fn router<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    // `add` and `available` are valid isbns too; the methods their static
    // routes do not use fall through to the isbn handlers.
    Router::new()
        .route("/api/books", get(list_all_books))
        .route("/api/books/add",
               post(add_book).get(find_book_by_add_isbn).delete(remove_book_by_add_isbn))
        .route("/api/books/available",
               get(list_available_books).delete(remove_book_by_available_isbn))
        .route("/api/books/title/:title", get(find_books_by_title))
        .route("/api/books/author/:author", get(find_books_by_author))
        .route("/api/books/:isbn",
               get(find_book_by_isbn).delete(remove_book))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<BookDto>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.service).execute(req).await?;
    Ok(Json(res.book))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Response, ServerError> {
    let req = GetBookCommandRequest { isbn };
    let not_found = req.not_found_message();
    let res = GetBookCommand::new(state.service).execute(req).await?;
    Ok(match res.book {
        Some(book) => Json(book).into_response(),
        None => (StatusCode::OK, not_found).into_response(),
    })
}

pub(crate) async fn list_all_books(
    State(state): State<AppState>) -> Result<Response, ServerError> {
    find_books(state, FindBooksCommandRequest::All).await
}

pub(crate) async fn list_available_books(
    State(state): State<AppState>) -> Result<Response, ServerError> {
    find_books(state, FindBooksCommandRequest::Available).await
}

pub(crate) async fn find_books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Response, ServerError> {
    find_books(state, FindBooksCommandRequest::Title(title)).await
}

pub(crate) async fn find_books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>) -> Result<Response, ServerError> {
    find_books(state, FindBooksCommandRequest::Author(author)).await
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<usize>, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    let res = RemoveBookCommand::new(state.service).execute(req).await?;
    Ok(Json(res.removed))
}

pub(crate) async fn find_book_by_add_isbn(state: State<AppState>) -> Result<Response, ServerError> {
    find_book_by_isbn(state, Path(ADD_SEGMENT.to_string())).await
}

pub(crate) async fn remove_book_by_add_isbn(state: State<AppState>) -> Result<Json<usize>, ServerError> {
    remove_book(state, Path(ADD_SEGMENT.to_string())).await
}

pub(crate) async fn remove_book_by_available_isbn(state: State<AppState>) -> Result<Json<usize>, ServerError> {
    remove_book(state, Path(AVAILABLE_SEGMENT.to_string())).await
}

// An empty result is answered with 200 and a descriptive message.
async fn find_books(state: AppState, req: FindBooksCommandRequest) -> Result<Response, ServerError> {
    let not_found = req.not_found_message();
    let res = FindBooksCommand::new(state.service).execute(req).await?;
    if res.books.is_empty() {
        Ok((StatusCode::OK, not_found).into_response())
    } else {
        Ok(Json(res.books).into_response())
    }
}
