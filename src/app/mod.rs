// ==========================================
// Danuferd Vehicle Catalog - application layer
// ==========================================

pub mod state;

pub use state::AppState;
