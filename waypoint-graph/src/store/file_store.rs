//! File-backed graph store: one JSON document per graph.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::codec::SerializedGraph;

use super::graph_store::{validate_name, GraphStore, StoreError};
use super::serializer::{JsonSerializer, Serializer};

const EXTENSION: &str = "json";

/// Directory of `<name>.json` files, one graph per file.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so readers never see a partially written graph.
pub struct FileGraphStore {
    dir: PathBuf,
    serializer: Box<dyn Serializer>,
}

impl FileGraphStore {
    /// Store rooted at `dir` (created on first write) using pretty JSON.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_serializer(dir, Box::new(JsonSerializer::pretty()))
    }

    pub fn with_serializer(dir: impl Into<PathBuf>, serializer: Box<dyn Serializer>) -> Self {
        Self {
            dir: dir.into(),
            serializer,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, EXTENSION))
    }
}

fn storage_error(e: std::io::Error) -> StoreError {
    StoreError::Storage(e.to_string())
}

#[async_trait]
impl GraphStore for FileGraphStore {
    async fn put(&self, name: &str, graph: &SerializedGraph) -> Result<(), StoreError> {
        validate_name(name)?;
        let bytes = self.serializer.serialize(graph)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(storage_error)?;
        let tmp = self.dir.join(format!(".{}.{}.tmp", name, EXTENSION));
        if let Err(e) = tokio::fs::write(&tmp, &bytes).await {
            tokio::fs::remove_file(&tmp).await.ok();
            return Err(storage_error(e));
        }
        if let Err(e) = tokio::fs::rename(&tmp, self.path_for(name)).await {
            tokio::fs::remove_file(&tmp).await.ok();
            return Err(storage_error(e));
        }
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<SerializedGraph>, StoreError> {
        validate_name(name)?;
        match tokio::fs::read(self.path_for(name)).await {
            Ok(bytes) => self.serializer.deserialize(&bytes).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error(e)),
        }
    }

    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_error(e)),
        };
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(storage_error)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_name(stem).is_ok() {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    async fn delete(&self, name: &str) -> Result<bool, StoreError> {
        validate_name(name)?;
        match tokio::fs::remove_file(self.path_for(name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(storage_error(e)),
        }
    }
}
