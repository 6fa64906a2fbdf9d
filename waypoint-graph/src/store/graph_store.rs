//! Named graph storage: the `GraphStore` trait, its error type and helpers.

use async_trait::async_trait;
use thiserror::Error;

use crate::codec::{decode, encode, FormatError, SerializedGraph};
use crate::graph::WaypointGraph;
use crate::logging;

/// Error for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("graph not found: {0}")]
    NotFound(String),
    /// Names must be non-empty and made of ASCII letters, digits, `-` and `_`.
    #[error("invalid graph name: {0:?}")]
    InvalidName(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("storage error: {0}")]
    Storage(String),
    /// Stored document decoded but violates the graph invariants.
    #[error("invalid graph data: {0}")]
    Format(#[from] FormatError),
}

/// Named collection of serialized graphs.
///
/// **Interaction**: The CLI picks one implementation from config and uses it
/// as `Box<dyn GraphStore>`; [`load_graph`] / [`save_graph`] do the codec step.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Stores `graph` under `name`, replacing any previous value.
    async fn put(&self, name: &str, graph: &SerializedGraph) -> Result<(), StoreError>;

    /// Returns the graph stored under `name`, or `None`.
    async fn get(&self, name: &str) -> Result<Option<SerializedGraph>, StoreError>;

    /// Stored names, sorted.
    async fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Removes `name`. Returns whether it existed.
    async fn delete(&self, name: &str) -> Result<bool, StoreError>;
}

/// Rejects names that would be unsafe as file names or ambiguous as keys.
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

/// Loads and decodes the graph named `name`.
pub async fn load_graph(store: &dyn GraphStore, name: &str) -> Result<WaypointGraph, StoreError> {
    logging::log_store_access("load", name);
    let serialized = store
        .get(name)
        .await?
        .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
    Ok(decode(&serialized)?)
}

/// Encodes `graph` and stores it under `name`.
pub async fn save_graph(
    store: &dyn GraphStore,
    name: &str,
    graph: &WaypointGraph,
) -> Result<(), StoreError> {
    logging::log_store_access("save", name);
    store.put(name, &encode(graph)).await
}
