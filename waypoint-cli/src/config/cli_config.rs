//! CLI config: store backend and location plus edit tuning. Filled from env / .env.
//!
//! Interacts with [`CliOptions`](super::CliOptions), [`open_store`](crate::open_store)
//! and waypoint-graph's [`EditConfig`].

use waypoint_graph::EditConfig;

use super::{CliOptions, StoreKind};

/// Error type used for config loading and command runs.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// CLI config. Can be filled from env / .env.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Store backend. Default: file.
    pub store: StoreKind,
    /// Directory (file store) or database file (sqlite store).
    pub store_path: String,
    /// Snap distance, fallback placement distance and default weight for replayed sessions.
    pub edit: EditConfig,
    /// When true, show debug logs. Requires --verbose.
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::File,
            store_path: StoreKind::File.default_path().to_string(),
            edit: EditConfig::default(),
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Fill config from env vars (and .env). Requires `dotenv::dotenv().ok()` first.
    ///
    /// All variables are optional: `WAYPOINT_STORE` (file|memory|sqlite),
    /// `WAYPOINT_STORE_PATH`, `WAYPOINT_SNAP_DISTANCE`,
    /// `WAYPOINT_FALLBACK_DISTANCE`, `WAYPOINT_DEFAULT_WEIGHT`. A value that
    /// does not parse is an error rather than silently ignored.
    pub fn from_env() -> Result<Self, Error> {
        let store: StoreKind = match std::env::var("WAYPOINT_STORE") {
            Ok(s) => s.parse()?,
            Err(_) => StoreKind::default(),
        };
        let store_path = std::env::var("WAYPOINT_STORE_PATH")
            .unwrap_or_else(|_| store.default_path().to_string());
        let mut edit = EditConfig::default();
        if let Some(d) = env_f32("WAYPOINT_SNAP_DISTANCE")? {
            edit.snap_distance = d;
        }
        if let Some(d) = env_f32("WAYPOINT_FALLBACK_DISTANCE")? {
            edit.fallback_distance = d;
        }
        if let Some(w) = env_f32("WAYPOINT_DEFAULT_WEIGHT")? {
            edit.default_weight = w;
        }
        Ok(Self {
            store,
            store_path,
            edit,
            verbose: false,
        })
    }

    /// Apply optional overrides from `CliOptions` to this config.
    ///
    /// Switching the store kind without a path also switches to that kind's
    /// default path, unless `WAYPOINT_STORE_PATH` set one explicitly.
    pub fn apply_options(&mut self, options: &CliOptions) {
        if let Some(kind) = options.store {
            if kind != self.store && self.store_path == self.store.default_path() {
                self.store_path = kind.default_path().to_string();
            }
            self.store = kind;
        }
        if let Some(path) = &options.store_path {
            self.store_path = path.clone();
        }
        if let Some(d) = options.snap_distance {
            self.edit.snap_distance = d;
        }
        if let Some(w) = options.default_weight {
            self.edit.default_weight = w;
        }
        self.verbose = options.verbose;
    }
}

fn env_f32(key: &str) -> Result<Option<f32>, Error> {
    match std::env::var(key) {
        Ok(s) => s
            .trim()
            .parse::<f32>()
            .map(Some)
            .map_err(|e| format!("{}: invalid number {:?}: {}", key, s, e).into()),
        Err(_) => Ok(None),
    }
}
