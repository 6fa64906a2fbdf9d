//! Edit session tuning: snap threshold, placement fallback, default weight, bindings.

use super::input::{KeyCode, Modifier};

/// Config for an [`EditSession`](super::EditSession).
///
/// **Interaction**: Read by the snap search (`snap_distance`), shift-click
/// placement (`fallback_distance`), gesture commit (`default_weight`), drawing
/// (`sphere_radius`) and event dispatch (`toggle_key`, `add_modifier`,
/// `delete_modifier`).
#[derive(Debug, Clone, PartialEq)]
pub struct EditConfig {
    /// Max screen-space distance at which the pointer targets a waypoint.
    pub snap_distance: f32,
    /// Placement distance along the pointer ray when the raycast hits nothing.
    pub fallback_distance: f32,
    /// Weight given to edges created by an add gesture.
    pub default_weight: f32,
    /// Radius of the waypoint markers drawn in connection mode.
    pub sphere_radius: f32,
    /// Key that switches between point and connection editing.
    pub toggle_key: KeyCode,
    /// Held on pointer-down to add (points or connections).
    pub add_modifier: Modifier,
    /// Held on pointer-down to delete a connection.
    pub delete_modifier: Modifier,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            snap_distance: 10.0,
            fallback_distance: 10.0,
            default_weight: 1.0,
            sphere_radius: 0.75,
            toggle_key: KeyCode::Space,
            add_modifier: Modifier::Shift,
            delete_modifier: Modifier::Control,
        }
    }
}

impl EditConfig {
    pub fn with_snap_distance(mut self, snap_distance: f32) -> Self {
        self.snap_distance = snap_distance;
        self
    }

    pub fn with_fallback_distance(mut self, fallback_distance: f32) -> Self {
        self.fallback_distance = fallback_distance;
        self
    }

    pub fn with_default_weight(mut self, default_weight: f32) -> Self {
        self.default_weight = default_weight;
        self
    }

    pub fn with_bindings(
        mut self,
        toggle_key: KeyCode,
        add_modifier: Modifier,
        delete_modifier: Modifier,
    ) -> Self {
        self.toggle_key = toggle_key;
        self.add_modifier = add_modifier;
        self.delete_modifier = delete_modifier;
        self
    }
}
