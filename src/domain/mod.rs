// ==========================================
// Danuferd Vehicle Catalog - domain layer
// ==========================================
// Entities and the two catalog enums. No I/O here.
// ==========================================

pub mod types;
pub mod vehicle;

pub use types::{CatalogTab, Category, Condition};
pub use vehicle::{now_timestamp, FormFieldError, RawVehicleRow, Vehicle, VehicleForm};
