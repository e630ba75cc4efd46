use std::fmt;

// === StorageError ===

/// Errors produced by key-value storage backends.
#[derive(Debug)]
pub enum StorageError {
    /// An I/O error occurred while reading, writing, or deleting a value.
    Io(String),
    /// The underlying database rejected an operation.
    Database(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
            StorageError::Database(msg) => write!(f, "Storage database error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === HistoryError ===

/// Errors related to parse-history operations.
///
/// Reads never fail (a missing or corrupt persisted list degrades to empty);
/// only writes and deletes surface errors.
#[derive(Debug)]
pub enum HistoryError {
    /// The persistence layer rejected a write or delete.
    Persistence(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Persistence(msg) => write!(f, "History persistence error: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}

// === AuthError ===

/// Errors related to the login-flag store.
#[derive(Debug)]
pub enum AuthError {
    /// The persistence layer rejected a write or delete.
    Persistence(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Persistence(msg) => write!(f, "Auth persistence error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

// === ParseError ===

/// Errors related to the parse-service client.
#[derive(Debug)]
pub enum ParseError {
    /// The input contained no recognizable http(s) link.
    InvalidLink(String),
    /// A network error occurred while calling the parse service.
    Network(String),
    /// The parse service answered with a non-success envelope.
    Api { code: i64, msg: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidLink(input) => write!(f, "No link found in input: {}", input),
            ParseError::Network(msg) => write!(f, "Parse network error: {}", msg),
            ParseError::Api { code, msg } => write!(f, "Parse service error {}: {}", code, msg),
        }
    }
}

impl std::error::Error for ParseError {}
