// ==========================================
// Danuferd Vehicle Catalog - auth flag repository
// ==========================================
// One boolean under a fixed key, living next to the vehicle records
// but unrelated to them. Missing row reads as false.
// ==========================================

use crate::db::{open_catalog_connection, AUTH_FLAG_KEY};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

pub struct AuthStateRepository {
    conn: Arc<Mutex<Connection>>,
}

impl AuthStateRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_catalog_connection(db_path)
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Persist the authenticated flag (set on login, cleared on logout).
    pub fn set_authenticated(&self, authenticated: bool) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO auth_state (key, value) VALUES (?1, ?2)",
            params![AUTH_FLAG_KEY, authenticated as i64],
        )?;
        Ok(())
    }

    /// Read the authenticated flag; unset means false.
    pub fn get_authenticated(&self) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            "SELECT value FROM auth_state WHERE key = ?1",
            params![AUTH_FLAG_KEY],
            |row| row.get::<_, i64>(0),
        );

        match result {
            Ok(value) => Ok(value != 0),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
