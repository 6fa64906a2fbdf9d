//! Graph codec: `WaypointGraph` <-> flat, index-addressed `SerializedGraph`.
//!
//! Waypoints refer to each other by handle, which flat formats cannot carry.
//! Encoding replaces each neighbor handle with the neighbor's current index;
//! decoding rebuilds every waypoint first (establishing the index space) and
//! only then resolves indices back into handles. Decoding is all-or-nothing.

mod decode;
mod encode;
mod format_error;
mod serialized;

pub use decode::decode;
pub use encode::encode;
pub use format_error::FormatError;
pub use serialized::{SerializedGraph, SerializedWaypoint};
