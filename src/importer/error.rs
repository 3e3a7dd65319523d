// ==========================================
// Danuferd Vehicle Catalog - importer error types
// ==========================================
// Structural failures only. Row-level validation problems are data
// (`ParseOutcome::errors`), never error values.
// ==========================================

use thiserror::Error;

/// Importer error type.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== structural (fatal to the whole import) =====
    #[error("CSV file must have at least a header row and one data row")]
    InvalidStructure,

    #[error("Missing required headers: {0}")]
    MissingHeaders(String),

    #[error("CSV read failed: {0}")]
    CsvRead(String),

    // ===== export =====
    #[error("No data to export")]
    EmptyExport,

    // ===== file access (binary surface) =====
    #[error("File read failed: {0}")]
    FileRead(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileRead(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvRead(err.to_string())
    }
}

/// Result alias for the importer layer.
pub type ImportResult<T> = Result<T, ImportError>;
