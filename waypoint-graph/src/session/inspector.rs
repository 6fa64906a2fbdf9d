//! Inspector panel state: per-waypoint foldouts and the rows a host renders.
//!
//! Foldout flags are keyed by waypoint handle and only change size through
//! [`InspectorState::sync`], so removing a waypoint cannot shift another
//! waypoint's flags onto the wrong row.

use std::collections::HashMap;

use crate::error::GraphError;
use crate::geometry::Vec3;
use crate::graph::{WaypointGraph, WaypointId};

/// Foldout flags for one waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointFoldout {
    pub expanded: bool,
    pub connections_expanded: bool,
}

impl Default for PointFoldout {
    fn default() -> Self {
        Self {
            expanded: true,
            connections_expanded: false,
        }
    }
}

/// One waypoint row: label, position field and (when unfolded) its connections.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRow {
    pub id: WaypointId,
    pub label: String,
    pub position: Vec3,
    pub foldout: PointFoldout,
    /// `Some` only when the connections foldout is open.
    pub connections: Option<Vec<ConnectionRow>>,
}

/// One connection weight field under a waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionRow {
    pub neighbor: WaypointId,
    pub label: String,
    pub weight: f32,
}

/// Inspector state for one graph.
#[derive(Debug, Clone)]
pub struct InspectorState {
    points_expanded: bool,
    foldouts: HashMap<WaypointId, PointFoldout>,
}

impl Default for InspectorState {
    fn default() -> Self {
        Self {
            points_expanded: true,
            foldouts: HashMap::new(),
        }
    }
}

impl InspectorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds default foldouts for new waypoints and drops those of removed ones.
    pub fn sync(&mut self, graph: &WaypointGraph) {
        self.foldouts.retain(|id, _| graph.contains(*id));
        for id in graph.ids() {
            self.foldouts.entry(id).or_default();
        }
    }

    pub fn len(&self) -> usize {
        self.foldouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foldouts.is_empty()
    }

    pub fn points_expanded(&self) -> bool {
        self.points_expanded
    }

    pub fn set_points_expanded(&mut self, expanded: bool) {
        self.points_expanded = expanded;
    }

    pub fn foldout(&self, id: WaypointId) -> Option<PointFoldout> {
        self.foldouts.get(&id).copied()
    }

    /// Fails with `InvalidHandle` for a waypoint not seen by the last `sync`.
    pub fn set_expanded(&mut self, id: WaypointId, expanded: bool) -> Result<(), GraphError> {
        let foldout = self
            .foldouts
            .get_mut(&id)
            .ok_or(GraphError::InvalidHandle(id))?;
        foldout.expanded = expanded;
        Ok(())
    }

    pub fn set_connections_expanded(
        &mut self,
        id: WaypointId,
        expanded: bool,
    ) -> Result<(), GraphError> {
        let foldout = self
            .foldouts
            .get_mut(&id)
            .ok_or(GraphError::InvalidHandle(id))?;
        foldout.connections_expanded = expanded;
        Ok(())
    }

    /// Rows in graph order. Empty while the top-level "Points" foldout is closed.
    ///
    /// Waypoints missing from the state (no `sync` since they were added) get
    /// default foldouts in the output without being stored.
    pub fn rows(&self, graph: &WaypointGraph) -> Vec<PointRow> {
        if !self.points_expanded {
            return Vec::new();
        }
        graph
            .waypoints()
            .enumerate()
            .map(|(index, point)| {
                let foldout = self.foldout(point.id()).unwrap_or_default();
                let connections = (foldout.expanded && foldout.connections_expanded).then(|| {
                    point
                        .neighbors()
                        .iter()
                        .filter_map(|(&neighbor, &weight)| {
                            graph.index_of(neighbor).ok().map(|i| ConnectionRow {
                                neighbor,
                                label: format!("Point {}", i),
                                weight,
                            })
                        })
                        .collect()
                });
                PointRow {
                    id: point.id(),
                    label: format!("Point {}", index),
                    position: point.position(),
                    foldout,
                    connections,
                }
            })
            .collect()
    }
}
