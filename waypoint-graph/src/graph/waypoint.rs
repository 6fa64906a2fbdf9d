//! Waypoint node and its stable handle.

use std::collections::BTreeMap;
use std::fmt;

use crate::geometry::Vec3;

/// Stable handle to a waypoint.
///
/// Issued by [`WaypointGraph::add_point`](super::WaypointGraph::add_point) and
/// valid until that waypoint is removed. Handles are never reused, and carry
/// the issuing graph's tag so a handle from another graph is rejected instead
/// of silently aliasing a local waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaypointId {
    graph: u32,
    serial: u32,
}

impl WaypointId {
    pub(crate) fn new(graph: u32, serial: u32) -> Self {
        Self { graph, serial }
    }

    /// Same serial, issued by another graph.
    pub(crate) fn retagged(self, graph: u32) -> Self {
        Self { graph, ..self }
    }

    /// Creation order within the issuing graph.
    pub fn serial(self) -> u32 {
        self.serial
    }
}

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.graph, self.serial)
    }
}

/// A positioned node plus its half of every incident edge.
///
/// Adjacency is keyed by handle; iteration follows creation order of the
/// neighbors. Only the owning graph mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    id: WaypointId,
    position: Vec3,
    neighbors: BTreeMap<WaypointId, f32>,
}

impl Waypoint {
    pub(crate) fn new(id: WaypointId, position: Vec3) -> Self {
        Self {
            id,
            position,
            neighbors: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> WaypointId {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Read-only view of this waypoint's adjacency (neighbor -> weight).
    pub fn neighbors(&self) -> &BTreeMap<WaypointId, f32> {
        &self.neighbors
    }

    pub fn weight_to(&self, other: WaypointId) -> Option<f32> {
        self.neighbors.get(&other).copied()
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Copy of this waypoint with its own and its neighbors' handles moved to `graph`.
    pub(crate) fn retagged(&self, graph: u32) -> Self {
        Self {
            id: self.id.retagged(graph),
            position: self.position,
            neighbors: self
                .neighbors
                .iter()
                .map(|(id, w)| (id.retagged(graph), *w))
                .collect(),
        }
    }

    pub(crate) fn set_link(&mut self, other: WaypointId, weight: f32) {
        self.neighbors.insert(other, weight);
    }

    pub(crate) fn remove_link(&mut self, other: WaypointId) -> bool {
        self.neighbors.remove(&other).is_some()
    }
}
