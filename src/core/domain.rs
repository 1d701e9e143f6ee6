use std::env;
use crate::core::repository::RepositoryStore;

pub const DEFAULT_BOOKS_TABLE: &str = "books";
pub const DEFAULT_DDB_ENDPOINT: &str = "http://localhost:8000";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub store: RepositoryStore,
    pub books_table: String,
    pub ddb_endpoint: String,
    pub listen_addr: String,
    pub lambda: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            store: RepositoryStore::LocalDynamoDB,
            books_table: DEFAULT_BOOKS_TABLE.to_string(),
            ddb_endpoint: DEFAULT_DDB_ENDPOINT.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            lambda: false,
        }
    }

    /// Builds the configuration from `LBMS_*` environment variables, falling
    /// back to the defaults of [`Configuration::new`] for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(
            lookup("LBMS_BRANCH").as_deref().unwrap_or("dev"));
        if let Some(store) = lookup("LBMS_STORE") {
            config.store = RepositoryStore::from(store);
        }
        if let Some(table) = lookup("LBMS_BOOKS_TABLE") {
            config.books_table = table;
        }
        if let Some(endpoint) = lookup("LBMS_DDB_ENDPOINT") {
            config.ddb_endpoint = endpoint;
        }
        if let Some(addr) = lookup("LBMS_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        if let Some(lambda) = lookup("LBMS_LAMBDA") {
            config.lambda = matches!(lambda.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        config
    }
}
