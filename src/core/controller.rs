use std::sync::Arc;
use axum::http::StatusCode;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::library::domain::LibraryService;
use crate::library::factory;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub service: Arc<dyn LibraryService>,
}

impl AppState {
    pub async fn new(config: Configuration, store: RepositoryStore) -> AppState {
        let service = factory::create_library_service(&config, store).await;
        AppState::with_service(config, Arc::from(service))
    }

    pub fn with_service(config: Configuration, service: Arc<dyn LibraryService>) -> AppState {
        AppState {
            config,
            service,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

// Request bodies are checked by json_to_server_error before a command runs,
// so any other command failure is a fault of the store.
impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { message } => {
                (StatusCode::CONFLICT, message)
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            CommandError::Database { .. } |
            CommandError::Runtime { .. } |
            CommandError::Serialization { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_map_duplicate_to_conflict() {
        let (status, body) = ServerError::from(CommandError::duplicate_key("Book with ISBN A1 already exists"));
        assert_eq!(StatusCode::CONFLICT, status);
        assert_eq!("Book with ISBN A1 already exists", body);
    }

    #[tokio::test]
    async fn test_should_map_database_to_server_error() {
        let (status, _) = ServerError::from(CommandError::Database {
            message: "connection refused".to_string(), reason_code: None, retryable: true });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }

    #[tokio::test]
    async fn test_should_map_rejected_store_request_to_server_error() {
        let err = LibraryError::database_or_unavailable(
            "ValidationException: key attribute isbn is empty", Some("400 Bad Request".to_string()), false);
        let (status, body) = ServerError::from(CommandError::from(err));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        assert!(body.contains("ValidationException"));
        assert!(!body.contains("Access"));
    }
}
