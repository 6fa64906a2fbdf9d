//! SQLite-backed graph store (feature `sqlite`).

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use crate::codec::SerializedGraph;

use super::graph_store::{validate_name, GraphStore, StoreError};
use super::serializer::{JsonSerializer, Serializer};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS graphs (
    name TEXT PRIMARY KEY,
    data BLOB NOT NULL
);
"#;

/// One row per graph in a `graphs(name, data)` table.
///
/// Blocking SQLite calls run on `spawn_blocking`; the connection is shared
/// behind a mutex.
pub struct SqliteGraphStore {
    conn: Arc<Mutex<Connection>>,
    serializer: Arc<dyn Serializer>,
}

fn storage_error(e: impl std::fmt::Display) -> StoreError {
    StoreError::Storage(e.to_string())
}

impl SqliteGraphStore {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(storage_error)?;
        Self::from_connection(conn)
    }

    /// Private in-memory database.
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(storage_error)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA).map_err(storage_error)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            serializer: Arc::new(JsonSerializer::default()),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, rusqlite::Error> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(storage_error)?;
            f(&guard).map_err(storage_error)
        })
        .await
        .map_err(storage_error)?
    }
}

#[async_trait]
impl GraphStore for SqliteGraphStore {
    async fn put(&self, name: &str, graph: &SerializedGraph) -> Result<(), StoreError> {
        validate_name(name)?;
        let data = self.serializer.serialize(graph)?;
        let name = name.to_string();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO graphs (name, data) VALUES (?1, ?2)
                 ON CONFLICT(name) DO UPDATE SET data = excluded.data",
                params![name, data],
            )
            .map(|_| ())
        })
        .await
    }

    async fn get(&self, name: &str) -> Result<Option<SerializedGraph>, StoreError> {
        validate_name(name)?;
        let name = name.to_string();
        let data: Option<Vec<u8>> = self
            .with_conn(move |conn| {
                conn.query_row(
                    "SELECT data FROM graphs WHERE name = ?1",
                    params![name],
                    |row| row.get(0),
                )
                .optional()
            })
            .await?;
        data.map(|bytes| self.serializer.deserialize(&bytes))
            .transpose()
    }

    async fn list(&self) -> Result<Vec<String>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT name FROM graphs ORDER BY name")?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
            rows.collect::<Result<Vec<String>, _>>()
        })
        .await
    }

    async fn delete(&self, name: &str) -> Result<bool, StoreError> {
        validate_name(name)?;
        let name = name.to_string();
        self.with_conn(move |conn| {
            conn.execute("DELETE FROM graphs WHERE name = ?1", params![name])
                .map(|n| n > 0)
        })
        .await
    }
}
