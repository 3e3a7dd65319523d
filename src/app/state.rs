// ==========================================
// Danuferd Vehicle Catalog - application state
// ==========================================
// Composition root. Opens the store connection exactly once, ensures
// the schema, and hands the shared handle to every repository and API
// explicitly - there is no lazily-created global connection.
// ==========================================

use std::sync::{Arc, Mutex};

use anyhow::Context;

use crate::api::{AdminApi, CatalogApi};
use crate::config::CatalogConfig;
use crate::db;
use crate::repository::{AuthStateRepository, VehicleRepository};

pub struct AppState {
    pub config: CatalogConfig,

    /// Admin panel operations (import/export/CRUD/auth flag).
    pub admin_api: Arc<AdminApi>,

    /// Listing page operations.
    pub catalog_api: Arc<CatalogApi>,
}

impl AppState {
    /// Build the whole object graph from one configuration.
    ///
    /// Because the connection is created and the schema ensured here,
    /// before anything else can touch the store, concurrent first use
    /// elsewhere can never race a second connection into existence.
    pub fn new(config: CatalogConfig) -> anyhow::Result<Self> {
        tracing::info!(db_path = %config.db_path, "initializing AppState");

        let conn = db::open_catalog_connection(&config.db_path)
            .with_context(|| format!("failed to open catalog database {}", config.db_path))?;
        db::ensure_schema(&conn).context("failed to ensure catalog schema")?;

        match db::read_schema_version(&conn) {
            Ok(Some(version)) if version != db::CURRENT_SCHEMA_VERSION => {
                tracing::warn!(
                    found = version,
                    expected = db::CURRENT_SCHEMA_VERSION,
                    "schema version mismatch, continuing on existing store"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not read schema version");
            }
            _ => {}
        }

        let conn = Arc::new(Mutex::new(conn));

        let vehicle_repo = Arc::new(VehicleRepository::from_connection(conn.clone()));
        let auth_repo = Arc::new(AuthStateRepository::from_connection(conn));

        let admin_api = Arc::new(AdminApi::new(vehicle_repo.clone(), auth_repo));
        let catalog_api = Arc::new(CatalogApi::new(vehicle_repo, config.page_size));

        tracing::info!("AppState initialized");

        Ok(Self {
            config,
            admin_api,
            catalog_api,
        })
    }
}
