// ==========================================
// Danuferd Vehicle Catalog - vehicle domain model
// ==========================================
// The Vehicle record is the persisted form: year and price stay
// numeric-literal strings, the query layer coerces them. Serde names
// follow the site's wire schema (merk/model/tipe/...).
// ==========================================

use crate::domain::types::{Category, Condition};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// Vehicle - the canonical catalog record
// ==========================================
// Owned by the record store; callers hold transient copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,

    #[serde(rename = "merk")]
    pub brand: String,
    pub model: String,
    #[serde(rename = "tipe", default)]
    pub vehicle_type: String,
    #[serde(rename = "warna", default)]
    pub color: String,
    #[serde(rename = "tahun")]
    pub year: String,
    #[serde(rename = "cc", default)]
    pub engine_capacity: String,
    #[serde(rename = "transmisi", default)]
    pub transmission: String,
    #[serde(rename = "lokasi", default)]
    pub location: String,
    #[serde(rename = "harga")]
    pub price: String,
    #[serde(rename = "kategori")]
    pub category: Category,
    #[serde(rename = "kondisi")]
    pub condition: Condition,

    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Vehicle {
    /// Generate a record id. Bulk import passes the row index so two
    /// rows parsed within the same millisecond stay distinct.
    pub fn generate_id(row_index: Option<usize>) -> String {
        let millis = Utc::now().timestamp_millis();
        match row_index {
            Some(index) => format!("vehicle_{}_{}", millis, index),
            None => format!("vehicle_{}", millis),
        }
    }
}

/// Current time in the persisted timestamp format (RFC 3339, millis).
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ==========================================
// RawVehicleRow - untyped import boundary
// ==========================================
// One CSV data row zipped against the header. This is the only place
// string-keyed rows exist; everything downstream is typed.
#[derive(Debug, Clone)]
pub struct RawVehicleRow {
    fields: HashMap<String, String>,
    /// 1-based physical row number in the source file (header = 1).
    pub row_number: usize,
}

impl RawVehicleRow {
    pub fn new(fields: HashMap<String, String>, row_number: usize) -> Self {
        Self { fields, row_number }
    }

    /// Cell value for a header, empty string when the column is absent.
    pub fn get(&self, header: &str) -> &str {
        self.fields.get(header).map(String::as_str).unwrap_or("")
    }
}

// ==========================================
// VehicleForm - single-record admin input
// ==========================================
// Mirrors the admin form: all fields arrive as raw strings and the
// category/condition selections are parsed during validation. The form
// requires tipe, which the CSV path does not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleForm {
    #[serde(rename = "merk", default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(rename = "tipe", default)]
    pub vehicle_type: String,
    #[serde(rename = "warna", default)]
    pub color: String,
    #[serde(rename = "tahun", default)]
    pub year: String,
    #[serde(rename = "cc", default)]
    pub engine_capacity: String,
    #[serde(rename = "transmisi", default)]
    pub transmission: String,
    #[serde(rename = "lokasi", default)]
    pub location: String,
    #[serde(rename = "harga", default)]
    pub price: String,
    #[serde(rename = "kategori", default)]
    pub category: String,
    #[serde(rename = "kondisi", default)]
    pub condition: String,
}

/// One failed form field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FormFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl VehicleForm {
    /// Validate required fields and parse the enum selections.
    ///
    /// Messages match the admin form's copy. An invalid selection is
    /// reported the same way as a missing one.
    pub fn validate(&self) -> Result<(Category, Condition), Vec<FormFieldError>> {
        let mut errors = Vec::new();

        let mut require = |field: &str, value: &str, message: &str| {
            if value.trim().is_empty() {
                errors.push(FormFieldError {
                    field: field.to_string(),
                    message: message.to_string(),
                });
            }
        };

        require("merk", &self.brand, "Merk wajib diisi");
        require("model", &self.model, "Model wajib diisi");
        require("tipe", &self.vehicle_type, "Tipe wajib diisi");
        require("tahun", &self.year, "Tahun wajib diisi");
        require("harga", &self.price, "Harga wajib diisi");

        let category = Category::parse_wire(self.category.trim());
        if category.is_none() {
            errors.push(FormFieldError {
                field: "kategori".to_string(),
                message: "Kategori wajib dipilih".to_string(),
            });
        }

        let condition = Condition::parse_wire(self.condition.trim());
        if condition.is_none() {
            errors.push(FormFieldError {
                field: "kondisi".to_string(),
                message: "Kondisi wajib dipilih".to_string(),
            });
        }

        match (category, condition) {
            (Some(category), Some(condition)) if errors.is_empty() => Ok((category, condition)),
            _ => Err(errors),
        }
    }

    /// Build a fresh record: generated id, both timestamps stamped now.
    pub fn into_vehicle(self) -> Result<Vehicle, Vec<FormFieldError>> {
        let (category, condition) = self.validate()?;
        let now = now_timestamp();
        Ok(Vehicle {
            id: Vehicle::generate_id(None),
            brand: self.brand,
            model: self.model,
            vehicle_type: self.vehicle_type,
            color: self.color,
            year: self.year,
            engine_capacity: self.engine_capacity,
            transmission: self.transmission,
            location: self.location,
            price: self.price,
            category,
            condition,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Build the replacement record for an update: id and created_at
    /// are preserved, updated_at is refreshed.
    pub fn apply_to(self, existing: &Vehicle) -> Result<Vehicle, Vec<FormFieldError>> {
        let (category, condition) = self.validate()?;
        Ok(Vehicle {
            id: existing.id.clone(),
            brand: self.brand,
            model: self.model,
            vehicle_type: self.vehicle_type,
            color: self.color,
            year: self.year,
            engine_capacity: self.engine_capacity,
            transmission: self.transmission,
            location: self.location,
            price: self.price,
            category,
            condition,
            created_at: existing.created_at.clone(),
            updated_at: now_timestamp(),
        })
    }
}
