//! Graph -> flat snapshot.

use crate::graph::WaypointGraph;

use super::{SerializedGraph, SerializedWaypoint};

/// Encodes `graph` in order; each neighbor handle becomes its current index.
///
/// Within one waypoint, entries follow the adjacency map's iteration order.
pub fn encode(graph: &WaypointGraph) -> SerializedGraph {
    let points = graph
        .waypoints()
        .map(|point| {
            let (neighbor_index, neighbor_weight): (Vec<i64>, Vec<f32>) = point
                .neighbors()
                .iter()
                .filter_map(|(&other, &weight)| {
                    graph.index_of(other).ok().map(|i| (i as i64, weight))
                })
                .unzip();
            SerializedWaypoint {
                position: point.position().to_array(),
                neighbor_index,
                neighbor_weight,
            }
        })
        .collect();
    SerializedGraph { points }
}
