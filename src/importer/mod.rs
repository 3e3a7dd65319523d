// ==========================================
// Danuferd Vehicle Catalog - importer layer
// ==========================================
// Responsibility: turn uploaded CSV text into canonical records.
// Structural failures abort; row failures are returned as data.
// ==========================================

pub mod csv_codec;
pub mod error;
pub mod row_validator;

pub use csv_codec::{CsvCodec, ParseOutcome, EXPORT_HEADERS, REQUIRED_IMPORT_HEADERS};
pub use error::{ImportError, ImportResult};
pub use row_validator::{parse_row, validate, ParsedRow};
