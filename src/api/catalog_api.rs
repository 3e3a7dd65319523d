// ==========================================
// Danuferd Vehicle Catalog - catalog read API
// ==========================================
// Read side of the listing page: loads the full record set, hands out
// normalized entries or a ready-to-drive browser.
// ==========================================

use crate::api::error::ApiResult;
use crate::normalizer::{CatalogEntry, CatalogNormalizer};
use crate::query::browser::CatalogBrowser;
use crate::repository::vehicle_repo::VehicleRepository;
use std::sync::Arc;

pub struct CatalogApi {
    vehicles: Arc<VehicleRepository>,
    page_size: usize,
}

impl CatalogApi {
    pub fn new(vehicles: Arc<VehicleRepository>, page_size: usize) -> Self {
        Self {
            vehicles,
            page_size,
        }
    }

    /// The full normalized record set.
    pub async fn load_entries(&self) -> ApiResult<Vec<CatalogEntry>> {
        let vehicles = self.vehicles.get_all()?;
        Ok(CatalogNormalizer::normalize_records(&vehicles))
    }

    /// A browser over the current record set, starting on the landing
    /// tab. The shell drives tab/filter/page changes on it.
    pub async fn open_browser(&self) -> ApiResult<CatalogBrowser> {
        let entries = self.load_entries().await?;
        Ok(CatalogBrowser::new(entries, self.page_size))
    }
}
