//! Decode error.
//!
//! Returned by `decode` when a `SerializedGraph` cannot be turned into a
//! graph that satisfies the symmetry, no-self-loop and no-dangling invariants.

use thiserror::Error;

/// Error when decoding a serialized graph. Positions are waypoint indices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// A neighbor index is negative or not below the waypoint count.
    #[error("waypoint {point}: neighbor index {index} out of range for {count} waypoints")]
    NeighborIndexOutOfRange { point: usize, index: i64, count: usize },

    /// `neighborIndex` and `neighborWeight` differ in length.
    #[error("waypoint {point}: {indices} neighbor indices but {weights} neighbor weights")]
    MismatchedLengths {
        point: usize,
        indices: usize,
        weights: usize,
    },

    /// A waypoint lists its own index as a neighbor.
    #[error("waypoint {point} lists itself as a neighbor")]
    SelfReference { point: usize },

    /// The same neighbor index appears twice in one waypoint's list.
    #[error("waypoint {point} lists neighbor {neighbor} more than once")]
    DuplicateNeighbor { point: usize, neighbor: usize },

    /// `point` lists `neighbor`, but `neighbor` does not list `point` with the same weight.
    #[error("edge {point} -> {neighbor} has no matching mirror entry")]
    AsymmetricEdge { point: usize, neighbor: usize },
}
