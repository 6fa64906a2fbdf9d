use async_trait::async_trait;
use dashmap::DashMap;

use crate::codec::SerializedGraph;

use super::graph_store::{validate_name, GraphStore, StoreError};

/// In-memory graph store; contents are lost when it is dropped.
///
/// **Interaction**: Used as `Box<dyn GraphStore>` by the CLI (`WAYPOINT_STORE=memory`)
/// and by tests.
#[derive(Debug, Default)]
pub struct InMemoryGraphStore {
    graphs: DashMap<String, SerializedGraph>,
}

impl InMemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GraphStore for InMemoryGraphStore {
    async fn put(&self, name: &str, graph: &SerializedGraph) -> Result<(), StoreError> {
        validate_name(name)?;
        self.graphs.insert(name.to_string(), graph.clone());
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<SerializedGraph>, StoreError> {
        validate_name(name)?;
        Ok(self.graphs.get(name).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names: Vec<String> = self.graphs.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        Ok(names)
    }

    async fn delete(&self, name: &str) -> Result<bool, StoreError> {
        validate_name(name)?;
        Ok(self.graphs.remove(name).is_some())
    }
}
