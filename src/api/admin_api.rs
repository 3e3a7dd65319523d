// ==========================================
// Danuferd Vehicle Catalog - admin API
// ==========================================
// The operations behind the admin panel: bulk CSV import/export,
// template download, single-record CRUD, and the persisted auth flag.
// Import is all-or-nothing against validation errors; storage-level
// failures on individual records are logged and skipped.
// ==========================================

use crate::domain::types::CatalogTab;
use crate::domain::vehicle::{FormFieldError, Vehicle, VehicleForm};
use crate::api::error::{ApiError, ApiResult};
use crate::importer::csv_codec::CsvCodec;
use crate::repository::auth_repo::AuthStateRepository;
use crate::repository::vehicle_repo::VehicleRepository;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of one bulk import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub batch_id: String,
    /// Data rows seen in the file (valid + invalid).
    pub total_rows: usize,
    pub imported: usize,
    /// Rows excluded by the tab restriction or by a storage failure.
    pub skipped: usize,
    /// Row-level validation errors; non-empty means nothing was
    /// committed.
    pub errors: Vec<String>,
}

pub struct AdminApi {
    vehicles: Arc<VehicleRepository>,
    auth: Arc<AuthStateRepository>,
}

impl AdminApi {
    pub fn new(vehicles: Arc<VehicleRepository>, auth: Arc<AuthStateRepository>) -> Self {
        Self { vehicles, auth }
    }

    /// Bulk-import CSV text.
    ///
    /// Structural problems (missing headers, too few lines) fail the
    /// call. Row validation errors block the whole batch: the summary
    /// carries them and zero records are committed. A clean batch is
    /// optionally restricted to one (category, condition) pair, then
    /// added record by record; an add failure (duplicate id, storage)
    /// is logged and counted as skipped without aborting the rest.
    pub async fn import_csv(
        &self,
        csv_text: &str,
        restrict_to: Option<CatalogTab>,
    ) -> ApiResult<ImportSummary> {
        let batch_id = Uuid::new_v4().to_string();
        let outcome = CsvCodec::parse(csv_text)?;
        let total_rows = outcome.records.len() + outcome.errors.len();

        if !outcome.errors.is_empty() {
            tracing::warn!(
                batch_id = %batch_id,
                error_rows = outcome.errors.len(),
                "import blocked by row validation, nothing committed"
            );
            return Ok(ImportSummary {
                batch_id,
                total_rows,
                imported: 0,
                skipped: 0,
                errors: outcome.errors,
            });
        }

        let mut imported = 0;
        let mut skipped = 0;

        for vehicle in &outcome.records {
            if let Some(tab) = restrict_to {
                if !tab.matches(vehicle.category, vehicle.condition) {
                    skipped += 1;
                    continue;
                }
            }

            match self.vehicles.add(vehicle) {
                Ok(()) => imported += 1,
                Err(err) => {
                    tracing::warn!(
                        batch_id = %batch_id,
                        vehicle_id = %vehicle.id,
                        error = %err,
                        "record skipped during import"
                    );
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            batch_id = %batch_id,
            total_rows,
            imported,
            skipped,
            "import finished"
        );

        Ok(ImportSummary {
            batch_id,
            total_rows,
            imported,
            skipped,
            errors: Vec::new(),
        })
    }

    /// Export every stored record as CSV. Fails when the store is
    /// empty.
    pub async fn export_csv(&self) -> ApiResult<String> {
        let vehicles = self.vehicles.get_all()?;
        Ok(CsvCodec::export_all(&vehicles)?)
    }

    /// The CSV starting file handed to admins.
    pub fn template_csv(&self) -> String {
        CsvCodec::generate_template()
    }

    /// Add one record from the admin form.
    pub async fn add_vehicle(&self, form: VehicleForm) -> ApiResult<Vehicle> {
        let vehicle = form.into_vehicle().map_err(form_errors)?;
        self.vehicles.add(&vehicle)?;
        tracing::info!(vehicle_id = %vehicle.id, "vehicle added");
        Ok(vehicle)
    }

    /// Add a pre-built record, keeping its id (seed/restore path).
    pub async fn add_record(&self, vehicle: &Vehicle) -> ApiResult<()> {
        self.vehicles.add(vehicle)?;
        tracing::info!(vehicle_id = %vehicle.id, "vehicle record added");
        Ok(())
    }

    /// Replace one record, keeping its id and created_at.
    pub async fn update_vehicle(&self, id: &str, form: VehicleForm) -> ApiResult<Vehicle> {
        let existing = self
            .vehicles
            .find_by_id(id)?
            .ok_or_else(|| ApiError::NotFound(format!("vehicle (id={})", id)))?;
        let updated = form.apply_to(&existing).map_err(form_errors)?;
        self.vehicles.update(&updated)?;
        tracing::info!(vehicle_id = %updated.id, "vehicle updated");
        Ok(updated)
    }

    /// Delete one record; unknown ids are a no-op.
    pub async fn delete_vehicle(&self, id: &str) -> ApiResult<()> {
        self.vehicles.delete_by_id(id)?;
        tracing::info!(vehicle_id = %id, "vehicle deleted");
        Ok(())
    }

    /// Drop every record.
    pub async fn clear_all(&self) -> ApiResult<()> {
        self.vehicles.clear_all()?;
        tracing::info!("vehicle store cleared");
        Ok(())
    }

    pub async fn list_vehicles(&self) -> ApiResult<Vec<Vehicle>> {
        Ok(self.vehicles.get_all()?)
    }

    pub async fn count(&self) -> ApiResult<usize> {
        Ok(self.vehicles.count()?)
    }

    /// Persist the session flag (set on login, cleared on logout).
    pub async fn set_authenticated(&self, authenticated: bool) -> ApiResult<()> {
        self.auth.set_authenticated(authenticated)?;
        Ok(())
    }

    pub async fn is_authenticated(&self) -> ApiResult<bool> {
        Ok(self.auth.get_authenticated()?)
    }
}

fn form_errors(errors: Vec<FormFieldError>) -> ApiError {
    let joined = errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join(", ");
    ApiError::ValidationError(joined)
}
