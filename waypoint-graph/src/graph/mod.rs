//! Waypoint graph: positioned nodes joined by symmetric weighted edges.
//!
//! Waypoints live in an ordered arena owned by [`WaypointGraph`] and refer to
//! each other through stable [`WaypointId`] handles, never through direct
//! references. Every edge is written to both endpoints inside a single graph
//! call so the mirrored entries cannot drift apart.

mod waypoint;
mod waypoint_graph;

pub use waypoint::{Waypoint, WaypointId};
pub use waypoint_graph::{Edge, WaypointGraph};
