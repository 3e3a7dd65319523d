// ==========================================
// Import a CSV file into the catalog store
// ==========================================
// Usage: import_vehicles <csv_path> [db_path]
// ==========================================

use anyhow::{bail, Context, Result};
use vehicle_catalog::config::CatalogConfig;
use vehicle_catalog::{logging, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let csv_path = match args.next() {
        Some(path) => path,
        None => bail!("usage: import_vehicles <csv_path> [db_path]"),
    };
    let config = match args.next() {
        Some(db_path) => CatalogConfig::with_db_path(db_path),
        None => CatalogConfig::default(),
    };

    let csv_text = std::fs::read_to_string(&csv_path)
        .with_context(|| format!("failed to read {}", csv_path))?;

    let state = AppState::new(config)?;
    let summary = state.admin_api.import_csv(&csv_text, None).await?;

    println!("Batch {}", summary.batch_id);
    println!(
        "  rows: {}  imported: {}  skipped: {}",
        summary.total_rows, summary.imported, summary.skipped
    );

    if !summary.errors.is_empty() {
        println!("Import blocked; fix these rows and retry:");
        for error in &summary.errors {
            println!("  {}", error);
        }
        std::process::exit(1);
    }

    Ok(())
}
