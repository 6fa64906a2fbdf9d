//! Logging utilities for graph edits.
//!
//! Provides structured logging for graph mutations, edit-session mode and
//! gesture transitions, decode failures and store access.

use crate::codec::FormatError;
use crate::geometry::Vec3;
use crate::graph::WaypointId;
use crate::session::{ConnectionAction, EditMode};

/// Log a waypoint being appended.
pub fn log_point_added(id: WaypointId, index: usize, position: Vec3) {
    #[cfg(feature = "tracing")]
    tracing::debug!(%id, index, %position, "Waypoint added");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Waypoint added: {} at index {} {}", id, index, position);
}

/// Log a waypoint being removed (edges referencing it are gone too).
pub fn log_point_removed(id: WaypointId, index: usize) {
    #[cfg(feature = "tracing")]
    tracing::debug!(%id, index, "Waypoint removed");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Waypoint removed: {} from index {}", id, index);
}

/// Log an edge being created or re-weighted.
pub fn log_connected(a: WaypointId, b: WaypointId, weight: f32) {
    #[cfg(feature = "tracing")]
    tracing::debug!(%a, %b, weight, "Waypoints connected");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Waypoints connected: {} <-> {} weight {}", a, b, weight);
}

/// Log an edge being removed.
pub fn log_disconnected(a: WaypointId, b: WaypointId) {
    #[cfg(feature = "tracing")]
    tracing::debug!(%a, %b, "Waypoints disconnected");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Waypoints disconnected: {} <-> {}", a, b);
}

/// Log an edit-session mode switch.
pub fn log_mode_changed(mode: EditMode) {
    #[cfg(feature = "tracing")]
    tracing::info!(?mode, "Edit mode changed");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[INFO] Edit mode changed: {:?}", mode);
}

/// Log the start of a connection gesture.
pub fn log_gesture_started(action: ConnectionAction, start: Option<WaypointId>) {
    #[cfg(feature = "tracing")]
    tracing::debug!(?action, ?start, "Connection gesture started");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[DEBUG] Connection gesture started: {:?} start={:?}",
        action, start
    );
}

/// Log a gesture that ended without touching the graph.
pub fn log_gesture_discarded(reason: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(reason, "Connection gesture discarded");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Connection gesture discarded: {}", reason);
}

/// Log a gesture whose commit was rejected by the graph.
pub fn log_gesture_rejected(error: &crate::error::GraphError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(%error, "Connection gesture rejected");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[WARN] Connection gesture rejected: {}", error);
}

/// Log a decode failure.
pub fn log_decode_error(error: &FormatError) {
    #[cfg(feature = "tracing")]
    tracing::error!(%error, "Graph decode failed");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[ERROR] Graph decode failed: {}", error);
}

/// Log a store read or write.
pub fn log_store_access(op: &str, name: &str) {
    #[cfg(feature = "tracing")]
    tracing::info!(op, name, "Graph store access");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[INFO] Graph store {}: {}", op, name);
}
