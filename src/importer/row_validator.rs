// ==========================================
// Danuferd Vehicle Catalog - row validation
// ==========================================
// Validates one raw CSV row and, when it passes, produces the typed
// row ready to become a Vehicle. Violations accumulate; one bad field
// never hides another.
// ==========================================

use crate::domain::types::{Category, Condition};
use crate::domain::vehicle::{now_timestamp, RawVehicleRow, Vehicle};

/// A raw row that passed validation, with the enum cells parsed.
#[derive(Debug, Clone)]
pub struct ParsedRow {
    pub id: Option<String>,
    pub brand: String,
    pub model: String,
    pub vehicle_type: String,
    pub color: String,
    pub year: String,
    pub engine_capacity: String,
    pub transmission: String,
    pub location: String,
    pub price: String,
    pub category: Category,
    pub condition: Condition,
}

impl ParsedRow {
    /// Finalize into a Vehicle: keep a supplied id, otherwise generate
    /// one carrying the data-row index; stamp both timestamps.
    pub fn into_vehicle(self, row_index: usize) -> Vehicle {
        let id = self
            .id
            .unwrap_or_else(|| Vehicle::generate_id(Some(row_index)));
        let now = now_timestamp();
        Vehicle {
            id,
            brand: self.brand,
            model: self.model,
            vehicle_type: self.vehicle_type,
            color: self.color,
            year: self.year,
            engine_capacity: self.engine_capacity,
            transmission: self.transmission,
            location: self.location,
            price: self.price,
            category: self.category,
            condition: self.condition,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Validate a raw row. Empty vector means the row is importable.
pub fn validate(row: &RawVehicleRow) -> Vec<String> {
    match parse_row(row) {
        Ok(_) => Vec::new(),
        Err(messages) => messages,
    }
}

/// Validate and type a raw row in one pass.
pub fn parse_row(row: &RawVehicleRow) -> Result<ParsedRow, Vec<String>> {
    let mut errors = Vec::new();

    let brand = row.get("merk").trim();
    let model = row.get("model").trim();
    let year = row.get("tahun").trim();
    let price = row.get("harga").trim();

    if brand.is_empty() {
        errors.push("Merk is required".to_string());
    }
    if model.is_empty() {
        errors.push("Model is required".to_string());
    }
    if year.is_empty() {
        errors.push("Tahun is required".to_string());
    }
    if price.is_empty() {
        errors.push("Harga is required".to_string());
    }

    let category = Category::parse_wire(row.get("kategori").trim());
    if category.is_none() {
        errors.push("Kategori must be Mobil or Motor".to_string());
    }

    let condition = Condition::parse_wire(row.get("kondisi").trim());
    if condition.is_none() {
        errors.push("Kondisi must be Baru or Bekas".to_string());
    }

    if !year.is_empty() && !is_numeric(year) {
        errors.push("Tahun must be a number".to_string());
    }

    // Thousands separators are permitted in prices and stripped before
    // the numeric check.
    if !price.is_empty() && !is_numeric(&price.replace(',', "")) {
        errors.push("Harga must be a number".to_string());
    }

    match (category, condition) {
        (Some(category), Some(condition)) if errors.is_empty() => {
            let id = {
                let raw = row.get("id").trim();
                if raw.is_empty() {
                    None
                } else {
                    Some(raw.to_string())
                }
            };
            Ok(ParsedRow {
                id,
                brand: brand.to_string(),
                model: model.to_string(),
                vehicle_type: row.get("tipe").trim().to_string(),
                color: row.get("warna").trim().to_string(),
                year: year.to_string(),
                engine_capacity: row.get("cc").trim().to_string(),
                transmission: row.get("transmisi").trim().to_string(),
                location: row.get("lokasi").trim().to_string(),
                price: price.to_string(),
                category,
                condition,
            })
        }
        _ => Err(errors),
    }
}

fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}
