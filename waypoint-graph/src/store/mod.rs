//! # Store: named persistence for waypoint graphs
//!
//! Every store keeps [`SerializedGraph`](crate::codec::SerializedGraph) values
//! under validated names; [`load_graph`] and [`save_graph`] run the codec so
//! a stored document that breaks the graph invariants surfaces as
//! [`StoreError::Format`].
//!
//! | Type                   | Persistence         | Feature           |
//! |------------------------|---------------------|-------------------|
//! | [`InMemoryGraphStore`] | In-memory           | `in-memory-store` |
//! | [`FileGraphStore`]     | `<dir>/<name>.json` | (always)          |
//! | [`SqliteGraphStore`]   | SQLite file         | `sqlite`          |

mod file_store;
mod graph_store;
#[cfg(feature = "in-memory-store")]
mod in_memory_store;
mod serializer;
#[cfg(feature = "sqlite")]
mod sqlite_store;

pub use file_store::FileGraphStore;
pub use graph_store::{load_graph, save_graph, validate_name, GraphStore, StoreError};
#[cfg(feature = "in-memory-store")]
pub use in_memory_store::InMemoryGraphStore;
pub use serializer::{JsonSerializer, Serializer};
#[cfg(feature = "sqlite")]
pub use sqlite_store::SqliteGraphStore;
