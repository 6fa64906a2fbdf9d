//! Flat snapshot -> graph, in two passes.

use std::collections::BTreeMap;

use crate::geometry::Vec3;
use crate::graph::WaypointGraph;
use crate::logging;

use super::{FormatError, SerializedGraph};

/// Decodes a snapshot into a fresh graph.
///
/// Pass one creates every waypoint so that any index below the waypoint
/// count has a target; pass two resolves neighbor indices and links both
/// endpoints. On error nothing is returned: the partially built graph is
/// dropped.
pub fn decode(serialized: &SerializedGraph) -> Result<WaypointGraph, FormatError> {
    let result = decode_checked(serialized);
    if let Err(e) = &result {
        logging::log_decode_error(e);
    }
    result
}

fn decode_checked(serialized: &SerializedGraph) -> Result<WaypointGraph, FormatError> {
    let count = serialized.len();

    let mut graph = WaypointGraph::new();
    for (point, entry) in serialized.points.iter().enumerate() {
        if entry.neighbor_index.len() != entry.neighbor_weight.len() {
            return Err(FormatError::MismatchedLengths {
                point,
                indices: entry.neighbor_index.len(),
                weights: entry.neighbor_weight.len(),
            });
        }
        graph.add_point(Vec3::from(entry.position));
    }

    let mut links: Vec<BTreeMap<usize, f32>> = Vec::with_capacity(count);
    for (point, entry) in serialized.points.iter().enumerate() {
        let mut own = BTreeMap::new();
        for (&raw, &weight) in entry.neighbor_index.iter().zip(&entry.neighbor_weight) {
            let neighbor = usize::try_from(raw)
                .ok()
                .filter(|&i| i < count)
                .ok_or(FormatError::NeighborIndexOutOfRange {
                    point,
                    index: raw,
                    count,
                })?;
            if neighbor == point {
                return Err(FormatError::SelfReference { point });
            }
            if own.insert(neighbor, weight).is_some() {
                return Err(FormatError::DuplicateNeighbor { point, neighbor });
            }
        }
        links.push(own);
    }

    for (point, own) in links.iter().enumerate() {
        for (&neighbor, &weight) in own {
            let mirrored = links[neighbor]
                .get(&point)
                .is_some_and(|&w| same_weight(w, weight));
            if !mirrored {
                return Err(FormatError::AsymmetricEdge { point, neighbor });
            }
            if point < neighbor {
                graph.link_at(point, neighbor, weight);
            }
        }
    }

    Ok(graph)
}

/// Bitwise match as well, so a NaN weight survives a round trip.
fn same_weight(a: f32, b: f32) -> bool {
    a == b || a.to_bits() == b.to_bits()
}
