//! Which [`GraphStore`](waypoint_graph::GraphStore) backs the CLI.

/// Store backend selected by `WAYPOINT_STORE` or `--store`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreKind {
    /// One `<name>.json` per graph under the store path (directory).
    #[default]
    File,
    /// Process-local; only useful for a single `replay` run or tests.
    Memory,
    /// SQLite database file at the store path.
    Sqlite,
}

impl StoreKind {
    /// Store path used when `WAYPOINT_STORE_PATH` is not set.
    pub fn default_path(self) -> &'static str {
        match self {
            StoreKind::File | StoreKind::Memory => "waypoints",
            StoreKind::Sqlite => "waypoints.db",
        }
    }
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(format!(
                "unknown store: {} (use file, memory, or sqlite)",
                s
            )),
        }
    }
}
