/// Unified error type for database lifecycle operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Connection string missing or empty; raised before any I/O
    #[error("Configuration error: {0}")]
    Config(String),

    /// Driver error during connect, surfaced unchanged
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    /// Driver error during disconnect; only the message is carried
    #[error("Disconnect failed: {0}")]
    Disconnect(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
