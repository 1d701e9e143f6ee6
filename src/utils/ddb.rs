use std::collections::HashMap;
use std::time::Duration;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::types::{AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType, TableStatus};
use serde_json::Value;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{Predicate, RepositoryStore};

pub(crate) async fn create_table(client: &Client, table_name: &str, pk: &str) -> LibraryResult<()> {
    match client
        .create_table()
        .table_name(table_name)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(pk)
                .key_type(KeyType::Hash)
                .build(),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(pk)
                .attribute_type(ScalarAttributeType::S)
                .build(),
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(10)
                .write_capacity_units(10)
                .build(),
        )
        .send()
        .await
    {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Creating).await;
            Ok(())
        }
        Err(err) => {
            Err(LibraryError::database_or_unavailable(format!("failed to create {} table due to {}",
                                                              table_name, err).as_str(), None, false))
        }
    }
}

#[cfg(test)]
pub(crate) async fn delete_table(client: &Client, table_name: &str) -> LibraryResult<()> {
    match client.delete_table().table_name(table_name).send().await {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Deleting).await;
            Ok(())
        }
        Err(err) => {
            Err(LibraryError::database_or_unavailable(format!("failed to delete {} table due to {}",
                                                              table_name, err).as_str(), None, false))
        }
    }
}

async fn wait_until_table_status_is_not(client: &Client, table_name: &str, other_status: TableStatus) {
    for _i in 0..30 {
        if let Ok(status) = describe_table(client, table_name).await {
            if status != other_status {
                return;
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

async fn describe_table(client: &Client, table_name: &str) -> LibraryResult<TableStatus> {
    match client
        .describe_table()
        .table_name(table_name)
        .send()
        .await
    {
        Ok(out) => {
            if let Some(table) = out.table() {
                if let Some(status) = table.table_status() {
                    return Ok(status.clone());
                }
            }
            Err(LibraryError::runtime(format!("failed to describe {} table",
                                              table_name).as_str(), None))
        }
        Err(err) => {
            Err(LibraryError::database_or_unavailable(format!("failed to describe {} table due to {}",
                                                              table_name, err).as_str(), None, false))
        }
    }
}

pub(crate) fn parse_item(value: Value) -> Result<HashMap<String, AttributeValue>, String> {
    match value_to_item(value) {
        AttributeValue::M(map) => Ok(map),
        other => Err(format!("failed to parse {:?}", other)),
    }
}

pub(crate) fn parse_string_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<String> {
    if let Some(AttributeValue::S(str)) = map.get(name) {
        return Some(str.clone());
    }
    None
}

pub(crate) fn parse_bool_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> bool {
    if let Some(AttributeValue::Bool(b)) = map.get(name) {
        return *b;
    }
    false
}

pub(crate) fn parse_number_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> i64 {
    if let Some(AttributeValue::N(str)) = map.get(name) {
        if let Ok(n) = str.parse::<i64>() {
            return n;
        }
    }
    0
}

// Appends `#k = :k` to the filter and returns the placeholder name; attribute
// names go through `#` aliases since words like `title` may be reserved.
pub(crate) fn add_filter_expr(k: &str, filter_expr: &mut String) -> String {
    let ks: String = k.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_').collect();
    if filter_expr.is_empty() {
        filter_expr.push_str(format!("#{} = :{}", ks, ks).as_str());
    } else {
        filter_expr.push_str(format!(" AND #{} = :{}", ks, ks).as_str());
    }
    ks
}

pub(crate) struct FilterExpression {
    pub expression: Option<String>,
    pub names: Option<HashMap<String, String>>,
    pub values: Option<HashMap<String, AttributeValue>>,
}

pub(crate) fn to_filter_expr(predicate: &Predicate) -> FilterExpression {
    if predicate.is_empty() {
        return FilterExpression { expression: None, names: None, values: None };
    }
    let mut expression = String::new();
    let mut names = HashMap::new();
    let mut values = HashMap::new();
    // sorted so that the same predicate always yields the same expression
    let mut keys: Vec<&String> = predicate.keys().collect();
    keys.sort();
    for k in keys {
        let ks = add_filter_expr(k.as_str(), &mut expression);
        names.insert(format!("#{}", ks), k.to_string());
        values.insert(format!(":{}", ks), value_to_item(predicate[k].clone()));
    }
    FilterExpression { expression: Some(expression), names: Some(names), values: Some(values) }
}

fn value_to_item(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(a) => AttributeValue::L(a.into_iter().map(value_to_item).collect()),
        Value::Object(o) => {
            AttributeValue::M(o.into_iter().map(|(k, v)| (k, value_to_item(v))).collect())
        }
    }
}

// helper method to build db-client with tracing enabled
pub(crate) async fn build_db_client(config: &Configuration, store: RepositoryStore) -> Client {
    match store {
        RepositoryStore::LocalDynamoDB => {
            // See https://docs.aws.amazon.com/sdk-for-rust/latest/dg/dynamodb-local.html
            let dynamodb_local_config = aws_sdk_dynamodb::Config::builder()
                .region(Region::new("local"))
                .credentials_provider(
                    Credentials::new("AKIDLOCALSTACK", "localstacksecret", None, None, "faked"))
                .endpoint_url(config.ddb_endpoint.as_str())
                .build();
            Client::from_conf(dynamodb_local_config)
        }
        _ => {
            //Get config from environment.
            let sdk_config = aws_config::load_from_env().await;
            //Create the DynamoDB client.
            Client::new(&sdk_config)
        }
    }
}

// required to enable CloudWatch error logging by the runtime
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in CloudWatch logs.
        .with_ansi(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .json()
        .init();
}

// the console owns stdout, so its logs go to stderr
pub fn setup_console_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .json()
        .init();
}

impl From<SdkError<PutItemError>> for LibraryError {
    fn from(err: SdkError<PutItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<GetItemError>> for LibraryError {
    fn from(err: SdkError<GetItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<DeleteItemError>> for LibraryError {
    fn from(err: SdkError<DeleteItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<ScanError>> for LibraryError {
    fn from(err: SdkError<ScanError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

fn retryable_sdk_error<T>(err: &SdkError<T>) -> (bool, Option<String>) {
    match err {
        SdkError::ConstructionFailure(_) => { (false, Some("ConstructionFailure".to_string())) }
        SdkError::TimeoutError(_) => { (true, Some("TimeoutError".to_string())) }
        SdkError::DispatchFailure(_) => { (true, Some("DispatchFailure".to_string())) }
        SdkError::ResponseError { .. } => { (true, Some("ResponseError".to_string())) }
        SdkError::ServiceError(ctx) => {
            (ctx.raw().http().status().is_server_error() || has_exceeded_limit(ctx.raw().http().body().bytes()), Some(ctx.raw().http().status().to_string()))
        }
        _ => { (true, Some("Unknown".to_string())) }
    }
}

// throughput errors read "...exceeded..." and are safe to retry
fn has_exceeded_limit(opts: Option<&[u8]>) -> bool {
    opts.map(|b| b.windows(6).any(|w| w == b"ceeded")).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use aws_sdk_dynamodb::types::AttributeValue;
    use serde_json::{json, Value};
    use crate::utils::ddb::{add_filter_expr, has_exceeded_limit, parse_bool_attribute, parse_item, parse_number_attribute, parse_string_attribute, to_filter_expr};

    #[tokio::test]
    async fn test_should_parse_item() {
        let item = parse_item(json!({"isbn": "A1", "publication_year": 1949, "is_available": true}))
            .expect("should parse item");
        assert_eq!(Some("A1".to_string()), parse_string_attribute("isbn", &item));
        assert_eq!(1949, parse_number_attribute("publication_year", &item));
        assert!(parse_bool_attribute("is_available", &item));
        assert_eq!(None, parse_string_attribute("title", &item));
    }

    #[tokio::test]
    async fn test_should_reject_non_object_item() {
        assert!(parse_item(json!("isbn")).is_err());
    }

    #[tokio::test]
    async fn test_should_add_filter_expr() {
        let mut expr = String::new();
        assert_eq!("title", add_filter_expr("title", &mut expr));
        assert_eq!("author", add_filter_expr("author", &mut expr));
        assert_eq!("#title = :title AND #author = :author", expr.as_str());
    }

    #[tokio::test]
    async fn test_should_build_filter_expr() {
        let predicate: HashMap<String, Value> = HashMap::from([
            ("is_available".to_string(), json!(true)),
            ("author".to_string(), json!("George Orwell")),
        ]);
        let filter = to_filter_expr(&predicate);
        assert_eq!(Some("#author = :author AND #is_available = :is_available".to_string()), filter.expression);
        let names = filter.names.expect("names");
        assert_eq!(Some(&"is_available".to_string()), names.get("#is_available"));
        let values = filter.values.expect("values");
        assert_eq!(Some(&AttributeValue::Bool(true)), values.get(":is_available"));
        assert_eq!(Some(&AttributeValue::S("George Orwell".to_string())), values.get(":author"));
    }

    #[tokio::test]
    async fn test_should_skip_empty_filter() {
        let filter = to_filter_expr(&HashMap::new());
        assert!(filter.expression.is_none());
        assert!(filter.names.is_none());
        assert!(filter.values.is_none());
    }

    #[tokio::test]
    async fn test_should_detect_exceeded_limit() {
        assert!(has_exceeded_limit(Some(b"ProvisionedThroughputExceededException".as_slice())));
        assert!(!has_exceeded_limit(Some(b"short".as_slice())));
        assert!(!has_exceeded_limit(None));
    }
}
