use thiserror::Error;

/// Failures reported by a [`SchemaProvider`](crate::schema::SchemaProvider).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Keyspace '{0}' not found")]
    KeyspaceNotFound(String),

    #[error("Table '{table}' not found in keyspace '{keyspace}'")]
    TableNotFound { keyspace: String, table: String },

    #[error("Connectivity error: {0}")]
    Connectivity(String),

    #[error("Malformed metadata: {0}")]
    MalformedMetadata(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::MalformedMetadata(e.to_string())
    }
}

impl From<std::io::Error> for SchemaError {
    fn from(e: std::io::Error) -> Self {
        SchemaError::Io(e.to_string())
    }
}
