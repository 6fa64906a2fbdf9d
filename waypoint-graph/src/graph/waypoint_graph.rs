//! Waypoint graph: ordered arena of waypoints with symmetric weighted adjacency.
//!
//! Add points with `add_point`, join them with `connect(a, b, weight)`, and
//! drop them with `remove_point` (which also strips every edge pointing at the
//! removed waypoint). Order is insertion order; removal shifts later indices
//! down by one while handles stay valid.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::GraphError;
use crate::geometry::Vec3;
use crate::logging;

use super::waypoint::{Waypoint, WaypointId};

/// Source of per-graph tags embedded in every issued handle.
static NEXT_GRAPH_TAG: AtomicU32 = AtomicU32::new(1);

/// One undirected edge, reported once per pair.
///
/// `a` is always the endpoint with the lower index at the time of the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: WaypointId,
    pub b: WaypointId,
    pub weight: f32,
}

/// Ordered collection of waypoints and their undirected weighted edges.
///
/// **Invariants** (upheld by every method):
/// - if `a` lists `b` with weight `w`, `b` lists `a` with weight `w`;
/// - no waypoint lists itself;
/// - every listed neighbor is present in this graph.
///
/// A clone is an independent snapshot with its own tag: handles issued by the
/// original are foreign to the clone. Map between the two with `index_of` and
/// `id_at`.
#[derive(Debug)]
pub struct WaypointGraph {
    tag: u32,
    next_serial: u32,
    points: Vec<Waypoint>,
    /// Handle -> position in `points`. Rebuilt for the tail on removal.
    index: HashMap<WaypointId, usize>,
}

impl Default for WaypointGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for WaypointGraph {
    fn clone(&self) -> Self {
        let tag = NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed);
        let points: Vec<Waypoint> = self.points.iter().map(|p| p.retagged(tag)).collect();
        let index = points.iter().enumerate().map(|(i, p)| (p.id(), i)).collect();
        Self {
            tag,
            next_serial: self.next_serial,
            points,
            index,
        }
    }
}

impl WaypointGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            tag: NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed),
            next_serial: 0,
            points: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a waypoint with no connections and returns its handle.
    pub fn add_point(&mut self, position: Vec3) -> WaypointId {
        let id = WaypointId::new(self.tag, self.next_serial);
        self.next_serial += 1;
        let index = self.points.len();
        self.points.push(Waypoint::new(id, position));
        self.index.insert(id, index);
        logging::log_point_added(id, index, position);
        id
    }

    /// Removes the waypoint and every adjacency entry referencing it.
    ///
    /// Waypoints after the removed one move down one index; their handles
    /// stay valid. Returns the removed waypoint's last position.
    pub fn remove_point(&mut self, id: WaypointId) -> Result<Vec3, GraphError> {
        let index = self.index_of(id)?;
        let removed = self.points.remove(index);
        self.index.remove(&id);
        for point in &mut self.points {
            point.remove_link(id);
        }
        for (i, point) in self.points.iter().enumerate().skip(index) {
            self.index.insert(point.id(), i);
        }
        logging::log_point_removed(id, index);
        Ok(removed.position())
    }

    /// Sets a symmetric edge between `a` and `b`, overwriting any existing weight.
    ///
    /// Fails with `InvalidHandle` for a handle not in this graph and with
    /// `SelfLoop` when `a == b`; the graph is untouched on failure.
    pub fn connect(&mut self, a: WaypointId, b: WaypointId, weight: f32) -> Result<(), GraphError> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if ia == ib {
            return Err(GraphError::SelfLoop(a));
        }
        self.link_at(ia, ib, weight);
        logging::log_connected(a, b, weight);
        Ok(())
    }

    /// Removes the edge between `a` and `b` from both sides.
    ///
    /// Returns whether an edge was present. Absent edges are a no-op; absent
    /// handles are still an error.
    pub fn disconnect(&mut self, a: WaypointId, b: WaypointId) -> Result<bool, GraphError> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if ia == ib {
            return Ok(false);
        }
        let removed_a = self.points[ia].remove_link(b);
        let removed_b = self.points[ib].remove_link(a);
        let removed = removed_a || removed_b;
        if removed {
            logging::log_disconnected(a, b);
        }
        Ok(removed)
    }

    /// Read-only adjacency of `a`: neighbor handle -> weight.
    pub fn neighbors(&self, a: WaypointId) -> Result<&BTreeMap<WaypointId, f32>, GraphError> {
        self.get(a)
            .map(Waypoint::neighbors)
            .ok_or(GraphError::InvalidHandle(a))
    }

    /// Weight of the edge between `a` and `b`, if both exist and are connected.
    pub fn weight(&self, a: WaypointId, b: WaypointId) -> Option<f32> {
        self.get(a).and_then(|p| p.weight_to(b))
    }

    pub fn position(&self, a: WaypointId) -> Result<Vec3, GraphError> {
        self.get(a)
            .map(Waypoint::position)
            .ok_or(GraphError::InvalidHandle(a))
    }

    /// Moves a waypoint; adjacency is unaffected.
    pub fn set_position(&mut self, a: WaypointId, position: Vec3) -> Result<(), GraphError> {
        let index = self.index_of(a)?;
        self.points[index].set_position(position);
        Ok(())
    }

    /// Current position of `a` in the ordered collection.
    pub fn index_of(&self, a: WaypointId) -> Result<usize, GraphError> {
        self.index
            .get(&a)
            .copied()
            .ok_or(GraphError::InvalidHandle(a))
    }

    pub fn contains(&self, a: WaypointId) -> bool {
        self.index.contains_key(&a)
    }

    /// Handle of the waypoint at `index`, if in range.
    pub fn id_at(&self, index: usize) -> Option<WaypointId> {
        self.points.get(index).map(Waypoint::id)
    }

    pub fn get(&self, a: WaypointId) -> Option<&Waypoint> {
        self.index.get(&a).map(|&i| &self.points[i])
    }

    /// Waypoints in order.
    pub fn waypoints(&self) -> impl Iterator<Item = &Waypoint> {
        self.points.iter()
    }

    /// Handles in order.
    pub fn ids(&self) -> impl Iterator<Item = WaypointId> + '_ {
        self.points.iter().map(Waypoint::id)
    }

    /// Every undirected edge exactly once, from the lower-indexed endpoint.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (i, point) in self.points.iter().enumerate() {
            for (&other, &weight) in point.neighbors() {
                match self.index.get(&other) {
                    Some(&j) if j > i => edges.push(Edge {
                        a: point.id(),
                        b: other,
                        weight,
                    }),
                    _ => {}
                }
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.points.iter().map(Waypoint::degree).sum::<usize>() / 2
    }

    /// Writes both halves of an edge by index. Callers guarantee `ia != ib`
    /// and both in range.
    pub(crate) fn link_at(&mut self, ia: usize, ib: usize, weight: f32) {
        let a = self.points[ia].id();
        let b = self.points[ib].id();
        self.points[ia].set_link(b, weight);
        self.points[ib].set_link(a, weight);
    }
}
