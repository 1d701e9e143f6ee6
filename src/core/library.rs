use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // Raised by the store when a record with the same isbn already exists.
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The store is throttling or temporarily unreachable, the caller may retry.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    /// Classifies a store failure from its transport status. Client-side
    /// rejections such as a 400 `ValidationException` stay database faults:
    /// book fields are stored as given, so the caller has nothing to fix.
    pub fn database_or_unavailable(message: &str, reason: Option<String>, retryable: bool) -> LibraryError {
        if retryable {
            return LibraryError::unavailable(
                format!("store unavailable {} {:?}", message, reason).as_str(), reason, true);
        }
        match reason.as_deref() {
            Some(status) if status.contains("404") => {
                LibraryError::not_found(format!("store reported not found {}", message).as_str())
            }
            _ => {
                LibraryError::database(format!("store error {} {:?}", message, reason).as_str(), reason, false)
            }
        }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Database { retryable, .. } |
            LibraryError::CurrentlyUnavailable { retryable, .. } => *retryable,
            _ => false,
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(format!("io {}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(format!("json {}", err).as_str())
    }
}

// item conversion in utils::ddb reports failures as plain strings
impl From<String> for LibraryError {
    fn from(err: String) -> Self {
        LibraryError::serialization(err.as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } |
            LibraryError::NotFound { message } |
            LibraryError::Serialization { message } => write!(f, "{}", message),
            LibraryError::Database { message, reason_code, .. } |
            LibraryError::CurrentlyUnavailable { message, reason_code, .. } |
            LibraryError::Runtime { message, reason_code } => match reason_code {
                Some(reason) => write!(f, "{} ({})", message, reason),
                None => write!(f, "{}", message),
            },
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library service and its repositories.
pub type LibraryResult<T> = Result<T, LibraryError>;
