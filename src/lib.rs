// ==========================================
// Danuferd Vehicle Catalog - core library
// ==========================================
// Catalog data management for the vehicle-financing site:
// CSV ingestion, persistent record store, catalog queries.
// The web/admin shell is an external caller of this crate.
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Importer layer - CSV codec and row validation
pub mod importer;

// Normalizer - raw feed fields to canonical catalog entries
pub mod normalizer;

// Query layer - tab/brand/filter predicates and pagination
pub mod query;

// Configuration
pub mod config;

// Database infrastructure (connection init / PRAGMA / schema)
pub mod db;

// Logging
pub mod logging;

// API layer - admin and catalog operations
pub mod api;

// Application layer - composition root
pub mod app;

// ==========================================
// Re-exports
// ==========================================

pub use domain::types::{CatalogTab, Category, Condition};
pub use domain::vehicle::{Vehicle, VehicleForm};

pub use importer::{CsvCodec, ImportError, ParseOutcome};

pub use normalizer::{CatalogEntry, CatalogNormalizer};

pub use query::{CatalogBrowser, CatalogSelection, FilterOptions, FilterSet, Page};

pub use api::{AdminApi, CatalogApi, ImportSummary};

pub use app::state::AppState;

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Danuferd Vehicle Catalog";

// The persisted store name is versioned through the schema table in `db`.
pub const DB_VERSION: &str = "v1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
