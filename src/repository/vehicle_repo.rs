// ==========================================
// Danuferd Vehicle Catalog - vehicle repository
// ==========================================
// CRUD over the `vehicles` collection plus the non-unique secondary
// lookups (merk/kategori/kondisi). No business logic here; every
// write is one transaction.
// ==========================================

use crate::db::open_catalog_connection;
use crate::domain::types::{Category, Condition};
use crate::domain::vehicle::Vehicle;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

const SELECT_COLUMNS: &str = "id, merk, model, tipe, warna, tahun, cc, transmisi, lokasi, harga, kategori, kondisi, created_at, updated_at";

pub struct VehicleRepository {
    conn: Arc<Mutex<Connection>>,
}

impl VehicleRepository {
    /// Open a dedicated connection for this repository.
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_catalog_connection(db_path)
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Share the composition root's connection handle.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// All records in storage (id) order. Display order is the query
    /// engine's job.
    pub fn get_all(&self) -> RepositoryResult<Vec<Vehicle>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM vehicles ORDER BY id",
            SELECT_COLUMNS
        ))?;

        let vehicles = stmt
            .query_map([], map_vehicle_row)?
            .collect::<SqliteResult<Vec<Vehicle>>>()?;
        Ok(vehicles)
    }

    /// Insert a new record. Fails with DuplicateKey when the id is
    /// already present.
    pub fn add(&self, vehicle: &Vehicle) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let exists: bool = tx
            .query_row(
                "SELECT 1 FROM vehicles WHERE id = ?1 LIMIT 1",
                params![vehicle.id],
                |_row| Ok(true),
            )
            .unwrap_or(false);
        if exists {
            return Err(RepositoryError::DuplicateKey(vehicle.id.clone()));
        }

        tx.execute(
            r#"
            INSERT INTO vehicles (
                id, merk, model, tipe, warna, tahun, cc, transmisi,
                lokasi, harga, kategori, kondisi, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
            "#,
            params![
                vehicle.id,
                vehicle.brand,
                vehicle.model,
                vehicle.vehicle_type,
                vehicle.color,
                vehicle.year,
                vehicle.engine_capacity,
                vehicle.transmission,
                vehicle.location,
                vehicle.price,
                vehicle.category.as_wire(),
                vehicle.condition.as_wire(),
                vehicle.created_at,
                vehicle.updated_at,
            ],
        )?;

        tx.commit()
            .map_err(|e| RepositoryError::TransactionError(e.to_string()))?;
        Ok(())
    }

    /// Replace the whole record by id (upsert).
    pub fn update(&self, vehicle: &Vehicle) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        tx.execute(
            r#"
            INSERT OR REPLACE INTO vehicles (
                id, merk, model, tipe, warna, tahun, cc, transmisi,
                lokasi, harga, kategori, kondisi, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
            "#,
            params![
                vehicle.id,
                vehicle.brand,
                vehicle.model,
                vehicle.vehicle_type,
                vehicle.color,
                vehicle.year,
                vehicle.engine_capacity,
                vehicle.transmission,
                vehicle.location,
                vehicle.price,
                vehicle.category.as_wire(),
                vehicle.condition.as_wire(),
                vehicle.created_at,
                vehicle.updated_at,
            ],
        )?;

        tx.commit()
            .map_err(|e| RepositoryError::TransactionError(e.to_string()))?;
        Ok(())
    }

    /// Delete by id. Deleting an unknown id is a no-op.
    pub fn delete_by_id(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM vehicles WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Remove every record.
    pub fn clear_all(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM vehicles", [])?;
        Ok(())
    }

    pub fn count(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM vehicles", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Vehicle>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM vehicles WHERE id = ?1",
            SELECT_COLUMNS
        ))?;

        let result = stmt.query_row(params![id], map_vehicle_row);
        match result {
            Ok(vehicle) => Ok(Some(vehicle)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Secondary lookup on the merk index.
    pub fn find_by_brand(&self, brand: &str) -> RepositoryResult<Vec<Vehicle>> {
        self.find_by_column("merk", brand)
    }

    /// Secondary lookup on the kategori index.
    pub fn find_by_category(&self, category: Category) -> RepositoryResult<Vec<Vehicle>> {
        self.find_by_column("kategori", category.as_wire())
    }

    /// Secondary lookup on the kondisi index.
    pub fn find_by_condition(&self, condition: Condition) -> RepositoryResult<Vec<Vehicle>> {
        self.find_by_column("kondisi", condition.as_wire())
    }

    fn find_by_column(&self, column: &str, value: &str) -> RepositoryResult<Vec<Vehicle>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM vehicles WHERE {} = ?1 ORDER BY id",
            SELECT_COLUMNS, column
        ))?;

        let vehicles = stmt
            .query_map(params![value], map_vehicle_row)?
            .collect::<SqliteResult<Vec<Vehicle>>>()?;
        Ok(vehicles)
    }
}

fn map_vehicle_row(row: &Row<'_>) -> rusqlite::Result<Vehicle> {
    let kategori: String = row.get(10)?;
    let kondisi: String = row.get(11)?;

    let category = Category::parse_wire(&kategori).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            10,
            Type::Text,
            format!("invalid kategori value: {}", kategori).into(),
        )
    })?;
    let condition = Condition::parse_wire(&kondisi).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            11,
            Type::Text,
            format!("invalid kondisi value: {}", kondisi).into(),
        )
    })?;

    Ok(Vehicle {
        id: row.get(0)?,
        brand: row.get(1)?,
        model: row.get(2)?,
        vehicle_type: row.get(3)?,
        color: row.get(4)?,
        year: row.get(5)?,
        engine_capacity: row.get(6)?,
        transmission: row.get(7)?,
        location: row.get(8)?,
        price: row.get(9)?,
        category,
        condition,
        created_at: row.get(12)?,
        updated_at: row.get(13)?,
    })
}
