//! # Waypoint Graph
//!
//! Editable navigation graphs: positioned waypoints joined by undirected,
//! weighted edges, a flat index-based serialized form, and an interactive
//! edit session that turns pointer and key input into graph edits.
//!
//! ## Design Principles
//!
//! - **Handles, not references**: waypoints live in an arena owned by
//!   [`WaypointGraph`] and are addressed by [`WaypointId`]. Handles stay valid
//!   when earlier waypoints are removed.
//! - **Symmetry by construction**: `connect` / `disconnect` / `remove_point`
//!   write both sides of every edge in one call.
//! - **Host-agnostic editing**: [`EditSession`] never renders; it asks a host
//!   [`Surface`] to project, pick and draw.
//!
//! ## Main Modules
//!
//! - [`graph`]: `WaypointGraph`, `WaypointId`, `Waypoint`, `Edge`.
//! - [`codec`]: `encode` / `decode` between the graph and `SerializedGraph`.
//! - [`session`]: `EditSession` state machine, input events, `Surface`, inspector state.
//! - [`store`]: `GraphStore` trait with in-memory, file and SQLite implementations.
//! - [`geometry`]: `Vec3`, `Vec2`, `Ray`, `Color`.
//!
//! ## Features
//!
//! - `in-memory-store` (default): `InMemoryGraphStore` backed by `dashmap`.
//! - `sqlite`: `SqliteGraphStore` backed by `rusqlite`.
//! - `tracing`: emit debug events through `tracing` instead of stderr.
//!
//! ## Quick Start
//!
//! ```rust
//! use waypoint_graph::{decode, encode, Vec3, WaypointGraph};
//!
//! let mut graph = WaypointGraph::new();
//! let a = graph.add_point(Vec3::new(0.0, 0.0, 0.0));
//! let b = graph.add_point(Vec3::new(4.0, 0.0, 0.0));
//! graph.connect(a, b, 2.5).unwrap();
//!
//! let json = serde_json::to_string(&encode(&graph)).unwrap();
//! let restored = decode(&serde_json::from_str(&json).unwrap()).unwrap();
//! assert_eq!(restored.edge_count(), 1);
//! ```

pub mod codec;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod logging;
pub mod session;
pub mod store;

pub use codec::{decode, encode, FormatError, SerializedGraph, SerializedWaypoint};
pub use error::GraphError;
pub use geometry::{Color, Ray, Vec2, Vec3};
pub use graph::{Edge, Waypoint, WaypointGraph, WaypointId};
pub use session::{
    ConnectionAction, EditConfig, EditMode, EditSession, EventResponse, Gesture, GraphChange,
    GraphCommand, InputEvent, InspectorState, KeyCode, Modifier, Modifiers, PointerButton, Surface,
};
#[cfg(feature = "in-memory-store")]
pub use store::InMemoryGraphStore;
#[cfg(feature = "sqlite")]
pub use store::SqliteGraphStore;
pub use store::{load_graph, save_graph, FileGraphStore, GraphStore, JsonSerializer, StoreError};
