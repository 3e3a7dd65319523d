// ==========================================
// Danuferd Vehicle Catalog - configuration
// ==========================================
// Carries the handful of knobs the composition root needs: where the
// store lives and how large a listing page is.
// ==========================================

use serde::{Deserialize, Serialize};

/// Default listing page size (matches the public listing page).
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Database file path.
    pub db_path: String,

    /// Items per page on the listing surface.
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    /// Config pointing at an explicit database path, default page size.
    pub fn with_db_path(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Resolve the default database path.
///
/// Precedence: VEHICLE_CATALOG_DB_PATH env var, then the user data
/// directory (separate dev directory under debug builds), then the
/// working directory as a last resort.
pub fn default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var("VEHICLE_CATALOG_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./vehicle_catalog.db");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("vehicle-catalog-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("vehicle-catalog");
        }

        std::fs::create_dir_all(&path).ok();
        path = path.join("vehicle_catalog.db");
    }

    path.to_string_lossy().to_string()
}
