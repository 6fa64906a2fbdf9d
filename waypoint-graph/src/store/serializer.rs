//! Serializer for stored graphs (serialized form <-> bytes).

use crate::codec::SerializedGraph;

use super::graph_store::StoreError;

/// Turns a [`SerializedGraph`] into bytes and back.
///
/// Used by the persistent stores (`FileGraphStore`, `SqliteGraphStore`).
/// `InMemoryGraphStore` keeps `SerializedGraph` values and does not use one.
pub trait Serializer: Send + Sync {
    fn serialize(&self, graph: &SerializedGraph) -> Result<Vec<u8>, StoreError>;
    fn deserialize(&self, bytes: &[u8]) -> Result<SerializedGraph, StoreError>;
}

/// JSON serializer producing the `points` / `position` / `neighborIndex` /
/// `neighborWeight` document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Indented output, for files people read.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Serializer for JsonSerializer {
    fn serialize(&self, graph: &SerializedGraph) -> Result<Vec<u8>, StoreError> {
        let result = if self.pretty {
            serde_json::to_vec_pretty(graph)
        } else {
            serde_json::to_vec(graph)
        };
        result.map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<SerializedGraph, StoreError> {
        serde_json::from_slice(bytes).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}
