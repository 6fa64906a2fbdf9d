//! Interactive editing: input events, the connection gesture state machine,
//! drawing through a host [`Surface`], and inspector state.
//!
//! **Interaction**: [`EditSession::handle_event`] and [`EditSession::draw`]
//! borrow a [`WaypointGraph`](crate::graph::WaypointGraph) per call;
//! [`GraphCommand`] and [`InspectorState`] cover the inspector panel.

mod command;
mod config;
mod edit_session;
mod gesture;
mod input;
mod inspector;
mod surface;

pub use command::GraphCommand;
pub use config::EditConfig;
pub use edit_session::{EditMode, EditSession, EventResponse, GraphChange};
pub use gesture::{nearest_within, ConnectionAction, Gesture};
pub use input::{InputEvent, KeyCode, Modifier, Modifiers, PointerButton};
pub use inspector::{ConnectionRow, InspectorState, PointFoldout, PointRow};
pub use surface::Surface;
