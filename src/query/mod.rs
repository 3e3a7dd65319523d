// ==========================================
// Danuferd Vehicle Catalog - query layer
// ==========================================
// Responsibility: turn the full normalized record set into what the
// listing page shows - tab/brand/filter predicates, pagination, and
// the per-tab option lists.
// ==========================================

pub mod browser;
pub mod engine;
pub mod filter;
pub mod pagination;

pub use browser::CatalogBrowser;
pub use engine::{apply, brand_options, filter_options, FilterOptions, CAR_BRANDS, MOTORCYCLE_BRANDS};
pub use filter::{CatalogSelection, FilterSet};
pub use pagination::{paginate, Page};
