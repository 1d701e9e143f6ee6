use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use serde_json::Value;
use crate::core::library::LibraryResult;

// Equality predicate keyed by the persisted attribute name.
pub type Predicate = HashMap<String, Value>;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, assigning its storage id; fails with DuplicateKey if the key is taken
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity by its key
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity by its key and return the number of removed records
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities in store order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;

    // entities whose attributes equal every entry of the predicate
    async fn query(&self, predicate: &Predicate) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepositoryStore {
    DynamoDB,
    LocalDynamoDB,
    InMemory,
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "dynamodb" | "ddb" => RepositoryStore::DynamoDB,
            "memory" | "inmemory" => RepositoryStore::InMemory,
            _ => RepositoryStore::LocalDynamoDB,
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::DynamoDB => write!(f, "dynamodb"),
            RepositoryStore::LocalDynamoDB => write!(f, "local"),
            RepositoryStore::InMemory => write!(f, "memory"),
        }
    }
}
