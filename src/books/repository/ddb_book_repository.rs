use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{Predicate, Repository};
use crate::utils::ddb::{parse_bool_attribute, parse_item, parse_number_attribute, parse_string_attribute, to_filter_expr};

const SCAN_PAGE_SIZE: i32 = 500;

// Books live in a single table whose partition key is the isbn, so the
// conditional put in create is the uniqueness constraint.
#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
}

impl DDBBookRepository {
    pub(crate) fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }

    // Follows LastEvaluatedKey until the whole table has been read.
    async fn scan(&self, predicate: &Predicate) -> LibraryResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let filter = to_filter_expr(predicate);
        let mut records = vec![];
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let out = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .set_filter_expression(filter.expression.clone())
                .set_expression_attribute_names(filter.names.clone())
                .set_expression_attribute_values(filter.values.clone())
                .set_exclusive_start_key(exclusive_start_key)
                .limit(SCAN_PAGE_SIZE)
                .send()
                .await?;
            records.extend(out.items().unwrap_or_default().iter().map(map_to_book));
            match out.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }
        debug!("scanned {} books from {} with {} predicates", records.len(), table_name, predicate.len());
        Ok(records)
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        let stored = entity.with_assigned_id();
        let val = serde_json::to_value(&stored)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(isbn)")
            .set_item(Some(parse_item(val)?))
            .send()
            .await
            .map(|_| stored)
            .map_err(|err| to_create_error(entity.isbn.as_str(), err))
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        let out = self.client
            .get_item()
            .table_name(table_name)
            .key("isbn", AttributeValue::S(id.to_string()))
            .consistent_read(true)
            .send()
            .await?;
        match out.item() {
            Some(map) if !map.is_empty() => Ok(map_to_book(map)),
            _ => Err(LibraryError::not_found(format!("book not found for {}", id).as_str())),
        }
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let out = self.client
            .delete_item()
            .table_name(table_name)
            .key("isbn", AttributeValue::S(id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await?;
        Ok(out.attributes().map(|old| if old.is_empty() { 0 } else { 1 }).unwrap_or(0))
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        self.scan(&HashMap::new()).await
    }

    // Note you cannot use certain reserved words per https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/ReservedWords.html
    // so attribute names are always aliased.
    async fn query(&self, predicate: &Predicate) -> LibraryResult<Vec<BookEntity>> {
        self.scan(predicate).await
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {}

// A failed attribute_not_exists(isbn) condition means the isbn is taken.
fn to_create_error(isbn: &str, err: SdkError<PutItemError>) -> LibraryError {
    if matches!(&err, SdkError::ServiceError(ctx) if ctx.err().is_conditional_check_failed_exception()) {
        LibraryError::duplicate_key(format!("book already exists for {}", isbn).as_str())
    } else {
        LibraryError::from(err)
    }
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> BookEntity {
    BookEntity {
        book_id: parse_string_attribute("book_id", map).unwrap_or_default(),
        isbn: parse_string_attribute("isbn", map).unwrap_or_default(),
        title: parse_string_attribute("title", map).unwrap_or_default(),
        author: parse_string_attribute("author", map).unwrap_or_default(),
        genre: parse_string_attribute("genre", map).unwrap_or_default(),
        publication_year: i32::try_from(parse_number_attribute("publication_year", map)).unwrap_or_default(),
        department: parse_string_attribute("department", map).unwrap_or_default(),
        is_available: parse_bool_attribute("is_available", map),
    }
}
