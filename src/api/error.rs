// ==========================================
// Danuferd Vehicle Catalog - API layer error types
// ==========================================
// Translates repository/importer failures into messages the admin
// shell can show as-is.
// ==========================================

use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API layer error type.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Storage failure: {0}")]
    Storage(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateKey(id) => {
                ApiError::Duplicate(format!("vehicle with id={}", id))
            }
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={})", entity, id))
            }
            RepositoryError::CorruptRecord(msg) => ApiError::Storage(msg),
            RepositoryError::ConnectionError(msg)
            | RepositoryError::LockError(msg)
            | RepositoryError::TransactionError(msg)
            | RepositoryError::QueryError(msg) => ApiError::Storage(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Result alias for the API layer.
pub type ApiResult<T> = Result<T, ApiError>;
