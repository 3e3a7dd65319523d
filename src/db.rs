// ==========================================
// Danuferd Vehicle Catalog - SQLite connection init
// ==========================================
// Goals:
// - one place for Connection::open PRAGMA behavior, so every module
//   sees the same foreign-key and busy_timeout settings
// - idempotent schema creation; safe to call on every startup
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// Default busy_timeout (milliseconds).
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Schema version the code expects. Bump together with `ensure_schema`.
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// Fixed key under which the authenticated flag is stored.
pub const AUTH_FLAG_KEY: &str = "authenticated";

/// Apply the uniform PRAGMAs to a connection.
///
/// foreign_keys and busy_timeout are per-connection settings, so this
/// must run for every connection we open.
pub fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a catalog database connection with the uniform configuration.
pub fn open_catalog_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Create the two catalog collections and their secondary indexes.
///
/// Idempotent: every statement is IF NOT EXISTS, so concurrent or
/// repeated initialization converges on the same schema. The secondary
/// indexes on merk/kategori/kondisi back the non-unique lookups on
/// `VehicleRepository`.
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS vehicles (
            id          TEXT PRIMARY KEY,
            merk        TEXT NOT NULL,
            model       TEXT NOT NULL,
            tipe        TEXT NOT NULL DEFAULT '',
            warna       TEXT NOT NULL DEFAULT '',
            tahun       TEXT NOT NULL,
            cc          TEXT NOT NULL DEFAULT '',
            transmisi   TEXT NOT NULL DEFAULT '',
            lokasi      TEXT NOT NULL DEFAULT '',
            harga       TEXT NOT NULL,
            kategori    TEXT NOT NULL,
            kondisi     TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_vehicles_merk ON vehicles(merk);
        CREATE INDEX IF NOT EXISTS idx_vehicles_kategori ON vehicles(kategori);
        CREATE INDEX IF NOT EXISTS idx_vehicles_kondisi ON vehicles(kondisi);

        CREATE TABLE IF NOT EXISTS auth_state (
            key   TEXT PRIMARY KEY,
            value INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );
        "#,
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, ?2)",
        rusqlite::params![
            CURRENT_SCHEMA_VERSION,
            chrono::Utc::now().to_rfc3339()
        ],
    )?;

    Ok(())
}

/// Read the schema version (None when the table does not exist yet).
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}
