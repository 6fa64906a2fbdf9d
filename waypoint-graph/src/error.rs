//! Graph operation error types.
//!
//! Returned by `WaypointGraph` mutations and lookups when the caller passes a
//! handle the graph does not own, or asks for a self-loop. Decode failures
//! live in [`FormatError`](crate::codec::FormatError).

use thiserror::Error;

use crate::graph::WaypointId;

/// Error from a `WaypointGraph` operation.
///
/// The graph is never mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The handle is absent from this graph (removed, or issued by another graph).
    #[error("waypoint not found: {0}")]
    InvalidHandle(WaypointId),

    /// `connect` was called with identical endpoints.
    #[error("cannot connect waypoint {0} to itself")]
    SelfLoop(WaypointId),
}
