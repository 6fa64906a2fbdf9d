//! Persisted layout of a waypoint graph.
//!
//! One entry per waypoint, in graph order: a 3-component position plus the
//! parallel `neighborIndex` / `neighborWeight` arrays describing its adjacency.

use serde::{Deserialize, Serialize};

use crate::graph::WaypointGraph;

use super::{decode, encode, FormatError};

/// Flat snapshot of a graph; the unit stored by every `GraphStore`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SerializedGraph {
    pub points: Vec<SerializedWaypoint>,
}

/// One waypoint in the flat snapshot.
///
/// `neighbor_index[i]` and `neighbor_weight[i]` describe the same edge.
/// Indices are signed so that corrupt negative values reach the decoder and
/// fail as a `FormatError` rather than as a parse error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedWaypoint {
    pub position: [f32; 3],
    #[serde(default)]
    pub neighbor_index: Vec<i64>,
    #[serde(default)]
    pub neighbor_weight: Vec<f32>,
}

impl SerializedGraph {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<&WaypointGraph> for SerializedGraph {
    fn from(graph: &WaypointGraph) -> Self {
        encode(graph)
    }
}

impl TryFrom<&SerializedGraph> for WaypointGraph {
    type Error = FormatError;

    fn try_from(serialized: &SerializedGraph) -> Result<Self, Self::Error> {
        decode(serialized)
    }
}
