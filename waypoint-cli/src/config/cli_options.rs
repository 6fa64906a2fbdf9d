//! Optional overrides for a CLI run (command-line flags or programmatic).
//!
//! Used by [`CliConfig::apply_options`](super::CliConfig::apply_options). Only
//! set fields override the env-based config.

use super::StoreKind;

/// Overrides for store selection and edit tuning.
#[derive(Clone, Debug, Default)]
pub struct CliOptions {
    /// Override `WAYPOINT_STORE`.
    pub store: Option<StoreKind>,
    /// Override `WAYPOINT_STORE_PATH`.
    pub store_path: Option<String>,
    /// Override `WAYPOINT_SNAP_DISTANCE` (screen units).
    pub snap_distance: Option<f32>,
    /// Override `WAYPOINT_DEFAULT_WEIGHT`.
    pub default_weight: Option<f32>,
    /// Show debug logs.
    pub verbose: bool,
}
