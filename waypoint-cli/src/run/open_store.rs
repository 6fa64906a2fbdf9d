//! Builds the configured [`GraphStore`].

use waypoint_graph::{FileGraphStore, GraphStore, InMemoryGraphStore};

use crate::config::{CliConfig, StoreKind};

use super::Error;

/// Opens the store selected by `config.store` at `config.store_path`.
///
/// `sqlite` fails when the binary was built without the `sqlite` feature.
pub fn open_store(config: &CliConfig) -> Result<Box<dyn GraphStore>, Error> {
    match config.store {
        StoreKind::File => Ok(Box::new(FileGraphStore::new(&config.store_path))),
        StoreKind::Memory => Ok(Box::new(InMemoryGraphStore::new())),
        StoreKind::Sqlite => open_sqlite(&config.store_path),
    }
}

#[cfg(feature = "sqlite")]
fn open_sqlite(path: &str) -> Result<Box<dyn GraphStore>, Error> {
    let store = waypoint_graph::SqliteGraphStore::open(path)?;
    Ok(Box::new(store))
}

#[cfg(not(feature = "sqlite"))]
fn open_sqlite(_path: &str) -> Result<Box<dyn GraphStore>, Error> {
    Err("sqlite store requires the `sqlite` feature".into())
}
