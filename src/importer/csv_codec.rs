// ==========================================
// Danuferd Vehicle Catalog - CSV codec
// ==========================================
// Parses uploaded CSV text into Vehicle records plus row-level error
// strings, and serializes records back out. Structural problems abort
// with an ImportError; bad rows are collected and parsing continues.
// ==========================================

use crate::domain::vehicle::{now_timestamp, RawVehicleRow, Vehicle};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::row_validator;
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;

/// Headers every import file must carry, in canonical order.
/// Order-independent on input; `id`/timestamps are optional extras.
pub const REQUIRED_IMPORT_HEADERS: [&str; 11] = [
    "merk",
    "model",
    "tipe",
    "warna",
    "tahun",
    "cc",
    "transmisi",
    "lokasi",
    "harga",
    "kategori",
    "kondisi",
];

/// Export header set: the import columns plus id and audit timestamps.
pub const EXPORT_HEADERS: [&str; 14] = [
    "id",
    "merk",
    "model",
    "tipe",
    "warna",
    "tahun",
    "cc",
    "transmisi",
    "lokasi",
    "harga",
    "kategori",
    "kondisi",
    "created_at",
    "updated_at",
];

const TEMPLATE_SAMPLE_ROWS: [[&str; 11]; 3] = [
    [
        "Toyota",
        "Avanza 1.5 G",
        "MPV",
        "Hitam",
        "2024",
        "1500",
        "CVT",
        "Jakarta",
        "255000000",
        "Mobil",
        "Baru",
    ],
    [
        "Honda",
        "PCX 160 ABS",
        "Matic",
        "Putih",
        "2024",
        "160",
        "Automatic",
        "Surabaya",
        "35000000",
        "Motor",
        "Baru",
    ],
    [
        "Suzuki",
        "Ertiga GX",
        "MPV",
        "Silver",
        "2024",
        "1500",
        "Manual",
        "Bandung",
        "240000000",
        "Mobil",
        "Baru",
    ],
];

/// Result of one parse run: importable records and the per-row error
/// strings for everything that was rejected.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<Vehicle>,
    pub errors: Vec<String>,
}

pub struct CsvCodec;

impl CsvCodec {
    /// Parse CSV text into records and row-level errors.
    ///
    /// Fails only on structural problems: fewer than two non-blank
    /// lines, or a missing required header. A failing row lands in
    /// `errors` as `"Row <n>: <messages>"` (1-based, header = row 1)
    /// and the remaining rows are still processed.
    pub fn parse(text: &str) -> ImportResult<ParseOutcome> {
        let non_blank_lines = text.lines().filter(|line| !line.trim().is_empty()).count();
        if non_blank_lines < 2 {
            return Err(ImportError::InvalidStructure);
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_matches('"').trim().to_string())
            .collect();

        let missing: Vec<&str> = REQUIRED_IMPORT_HEADERS
            .iter()
            .copied()
            .filter(|required| !headers.iter().any(|h| h == required))
            .collect();
        if !missing.is_empty() {
            return Err(ImportError::MissingHeaders(missing.join(", ")));
        }

        let mut records = Vec::new();
        let mut errors = Vec::new();

        for (index, result) in reader.records().enumerate() {
            // Blank lines are skipped by the reader, so the index walks
            // non-blank lines only; the header occupies row 1.
            let row_number = index + 2;

            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    errors.push(format!("Row {}: {}", row_number, err));
                    continue;
                }
            };

            let mut fields = HashMap::new();
            for (col, header) in headers.iter().enumerate() {
                let value = record
                    .get(col)
                    .unwrap_or("")
                    .trim_matches('"')
                    .trim()
                    .to_string();
                fields.insert(header.clone(), value);
            }
            if fields.values().all(|v| v.is_empty()) {
                continue;
            }

            let raw = RawVehicleRow::new(fields, row_number);
            match row_validator::parse_row(&raw) {
                Ok(parsed) => records.push(parsed.into_vehicle(index + 1)),
                Err(messages) => {
                    errors.push(format!("Row {}: {}", row_number, messages.join(", ")));
                }
            }
        }

        Ok(ParseOutcome { records, errors })
    }

    /// Template handed to admins: the required header line plus three
    /// illustrative sample rows, every cell quoted.
    pub fn generate_template() -> String {
        let mut lines = Vec::with_capacity(TEMPLATE_SAMPLE_ROWS.len() + 1);
        lines.push(REQUIRED_IMPORT_HEADERS.join(","));
        for row in TEMPLATE_SAMPLE_ROWS {
            lines.push(quoted_line(row.iter().copied()));
        }
        lines.join("\n")
    }

    /// Serialize records to the canonical export format.
    ///
    /// Every cell is quoted; optional fields default to the empty
    /// string and missing timestamps to now. The output re-imports
    /// through `parse` (the export headers are a superset of the
    /// required import set).
    pub fn export_all(records: &[Vehicle]) -> ImportResult<String> {
        if records.is_empty() {
            return Err(ImportError::EmptyExport);
        }

        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(EXPORT_HEADERS.join(","));

        for vehicle in records {
            let created_at = default_timestamp(&vehicle.created_at);
            let updated_at = default_timestamp(&vehicle.updated_at);
            let cells = [
                vehicle.id.as_str(),
                vehicle.brand.as_str(),
                vehicle.model.as_str(),
                vehicle.vehicle_type.as_str(),
                vehicle.color.as_str(),
                vehicle.year.as_str(),
                vehicle.engine_capacity.as_str(),
                vehicle.transmission.as_str(),
                vehicle.location.as_str(),
                vehicle.price.as_str(),
                vehicle.category.as_wire(),
                vehicle.condition.as_wire(),
                created_at.as_str(),
                updated_at.as_str(),
            ];
            lines.push(quoted_line(cells.into_iter()));
        }

        Ok(lines.join("\n"))
    }
}

fn quoted_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells
        .map(|cell| format!("\"{}\"", cell))
        .collect::<Vec<_>>()
        .join(",")
}

fn default_timestamp(value: &str) -> String {
    if value.trim().is_empty() {
        now_timestamp()
    } else {
        value.to_string()
    }
}
