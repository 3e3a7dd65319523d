// ==========================================
// Danuferd Vehicle Catalog - catalog normalizer
// ==========================================
// Maps raw feed items (source key names merk/model/tipe/...) and
// stored Vehicle records onto the query-side CatalogEntry, coercing
// year and price to numbers. Pure and stateless; no validation beyond
// the numeric coercion - unparsable numerics become None and the
// range filters treat them as never matching.
// ==========================================

use crate::domain::types::{Category, Condition};
use crate::domain::vehicle::Vehicle;
use serde::Deserialize;

// ==========================================
// CatalogEntry - the normalized, query-ready record
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub vehicle_type: String,
    pub color: String,
    pub year: Option<i32>,
    pub engine_capacity: String,
    pub transmission: String,
    pub location: String,
    pub price: Option<i64>,
    pub category: Category,
    pub condition: Condition,
}

impl From<&Vehicle> for CatalogEntry {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.clone(),
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            vehicle_type: vehicle.vehicle_type.clone(),
            color: vehicle.color.clone(),
            year: coerce_year(&vehicle.year),
            engine_capacity: vehicle.engine_capacity.clone(),
            transmission: vehicle.transmission.clone(),
            location: vehicle.location.clone(),
            price: coerce_price(&vehicle.price),
            category: vehicle.category,
            condition: vehicle.condition,
        }
    }
}

// ==========================================
// FeedVehicle - one raw feed item
// ==========================================
// Lenient on purpose: every field is optional and the enums arrive as
// plain strings.
#[derive(Debug, Clone, Deserialize)]
struct FeedVehicle {
    #[serde(default)]
    id: String,
    #[serde(default)]
    merk: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    tipe: String,
    #[serde(default)]
    warna: String,
    #[serde(default)]
    tahun: String,
    #[serde(default)]
    cc: String,
    #[serde(default)]
    transmisi: String,
    #[serde(default)]
    lokasi: String,
    #[serde(default)]
    harga: String,
    #[serde(default)]
    kategori: String,
    #[serde(default)]
    kondisi: String,
}

pub struct CatalogNormalizer;

impl CatalogNormalizer {
    /// Project stored records into the query-side shape.
    pub fn normalize_records(vehicles: &[Vehicle]) -> Vec<CatalogEntry> {
        vehicles.iter().map(CatalogEntry::from).collect()
    }

    /// Deserialize a raw feed (JSON array of source-keyed items) and
    /// normalize it. Items whose kategori/kondisi is not a known wire
    /// literal can never match a tab, so they are dropped here.
    pub fn normalize_feed(json: &str) -> serde_json::Result<Vec<CatalogEntry>> {
        let items: Vec<FeedVehicle> = serde_json::from_str(json)?;
        let entries = items
            .into_iter()
            .filter_map(|item| {
                let category = Category::parse_wire(item.kategori.trim());
                let condition = Condition::parse_wire(item.kondisi.trim());
                match (category, condition) {
                    (Some(category), Some(condition)) => Some(CatalogEntry {
                        id: item.id,
                        brand: item.merk,
                        model: item.model,
                        vehicle_type: item.tipe,
                        color: item.warna,
                        year: coerce_year(&item.tahun),
                        engine_capacity: item.cc,
                        transmission: item.transmisi,
                        location: item.lokasi,
                        price: coerce_price(&item.harga),
                        category,
                        condition,
                    }),
                    _ => {
                        tracing::debug!(
                            kategori = %item.kategori,
                            kondisi = %item.kondisi,
                            "dropping feed item outside the catalog enums"
                        );
                        None
                    }
                }
            })
            .collect();
        Ok(entries)
    }
}

fn coerce_year(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

fn coerce_price(value: &str) -> Option<i64> {
    value.replace(',', "").trim().parse::<i64>().ok()
}
