// ==========================================
// Seed the catalog store with the two demo records
// ==========================================
// Usage: seed_demo_data [db_path]
// Existing ids are left untouched.
// ==========================================

use anyhow::Result;
use vehicle_catalog::config::CatalogConfig;
use vehicle_catalog::domain::vehicle::{now_timestamp, Vehicle};
use vehicle_catalog::domain::{Category, Condition};
use vehicle_catalog::{logging, AppState};

fn demo_vehicles() -> Vec<Vehicle> {
    let now = now_timestamp();
    vec![
        Vehicle {
            id: "dummy001".to_string(),
            brand: "Toyota".to_string(),
            model: "Avanza 1.5 G".to_string(),
            vehicle_type: "MPV".to_string(),
            color: "Hitam".to_string(),
            year: "2024".to_string(),
            engine_capacity: "1500".to_string(),
            transmission: "CVT".to_string(),
            location: "Jakarta".to_string(),
            price: "255000000".to_string(),
            category: Category::Car,
            condition: Condition::New,
            created_at: now.clone(),
            updated_at: now.clone(),
        },
        Vehicle {
            id: "dummy002".to_string(),
            brand: "Honda".to_string(),
            model: "PCX 160 ABS".to_string(),
            vehicle_type: "Matic".to_string(),
            color: "Putih".to_string(),
            year: "2024".to_string(),
            engine_capacity: "160".to_string(),
            transmission: "Automatic".to_string(),
            location: "Surabaya".to_string(),
            price: "35000000".to_string(),
            category: Category::Motorcycle,
            condition: Condition::New,
            created_at: now.clone(),
            updated_at: now,
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(db_path) => CatalogConfig::with_db_path(db_path),
        None => CatalogConfig::default(),
    };
    println!("Seeding demo data into {}", config.db_path);

    let state = AppState::new(config)?;

    let mut seeded = 0;
    for vehicle in demo_vehicles() {
        match state.admin_api.add_record(&vehicle).await {
            Ok(()) => {
                println!("  + {} ({} {})", vehicle.id, vehicle.brand, vehicle.model);
                seeded += 1;
            }
            Err(err) => {
                println!("  - {} skipped: {}", vehicle.id, err);
            }
        }
    }

    let total = state.admin_api.count().await?;
    println!("Seeded {} record(s); store now holds {}.", seeded, total);
    Ok(())
}
