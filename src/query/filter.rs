// ==========================================
// Danuferd Vehicle Catalog - filter state
// ==========================================
// The active selection is one value replaced atomically on tab change;
// there is no way to switch tabs while keeping stale filters around.
// ==========================================

use crate::domain::types::CatalogTab;
use serde::{Deserialize, Serialize};

/// Advanced-filter panel state. A `None` field is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Case-insensitive substring over "brand model type color".
    pub search: Option<String>,
    pub brand: Option<String>,
    pub vehicle_type: Option<String>,
    pub transmission: Option<String>,
    pub location: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        *self == FilterSet::default()
    }
}

/// The full active selection on the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSelection {
    pub tab: CatalogTab,
    /// Brand chip selected under the tab row; None = "all brands".
    pub brand_tab: Option<String>,
    pub filters: FilterSet,
}

impl CatalogSelection {
    /// Fresh selection for a tab: no brand chip, empty filters. This
    /// is the only way a tab switch is expressed, so the reset is
    /// structural rather than a side effect callers must remember.
    pub fn for_tab(tab: CatalogTab) -> Self {
        Self {
            tab,
            brand_tab: None,
            filters: FilterSet::default(),
        }
    }
}

impl Default for CatalogSelection {
    fn default() -> Self {
        Self::for_tab(CatalogTab::default_tab())
    }
}
