// ==========================================
// Danuferd Vehicle Catalog - repository error types
// ==========================================

use thiserror::Error;

/// Repository layer error type.
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== key errors =====
    #[error("Duplicate key: vehicle with id={0} already exists")]
    DuplicateKey(String),

    #[error("Record not found: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    // ===== storage errors =====
    #[error("Database connection failed: {0}")]
    ConnectionError(String),

    #[error("Database lock acquisition failed: {0}")]
    LockError(String),

    #[error("Database transaction failed: {0}")]
    TransactionError(String),

    #[error("Database query failed: {0}")]
    QueryError(String),

    // ===== data quality =====
    #[error("Stored record is corrupt: {0}")]
    CorruptRecord(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.contains("UNIQUE") => {
                // The primary key is the only unique constraint in the
                // schema, so a UNIQUE failure is always a key clash.
                RepositoryError::DuplicateKey(msg)
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                id: "Unknown".to_string(),
            },
            _ => RepositoryError::QueryError(err.to_string()),
        }
    }
}

/// Result alias for the repository layer.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
