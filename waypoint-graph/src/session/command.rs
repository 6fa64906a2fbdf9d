//! Inspector commands: the edits an inspector panel issues outside the viewport.

use crate::error::GraphError;
use crate::geometry::Vec3;
use crate::graph::{WaypointGraph, WaypointId};

use super::edit_session::{EditSession, GraphChange};

/// One inspector edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphCommand {
    /// The "toggle editing mode" button.
    ToggleMode,
    /// The "+" button: appends a waypoint at the origin.
    AddPointAtOrigin,
    /// A position field edit.
    SetPosition { id: WaypointId, position: Vec3 },
    /// A weight field edit. Writes both directions, so it also creates the edge.
    SetWeight {
        a: WaypointId,
        b: WaypointId,
        weight: f32,
    },
    /// The "-" button next to a waypoint.
    RemovePoint(WaypointId),
}

impl GraphCommand {
    /// Applies the command to `graph`, keeping `session` consistent with it.
    ///
    /// The graph is untouched when an error is returned.
    pub fn apply(
        self,
        graph: &mut WaypointGraph,
        session: &mut EditSession,
    ) -> Result<GraphChange, GraphError> {
        match self {
            GraphCommand::ToggleMode => Ok(GraphChange::ModeChanged(session.toggle_mode())),
            GraphCommand::AddPointAtOrigin => Ok(GraphChange::PointAdded(graph.add_point(Vec3::ZERO))),
            GraphCommand::SetPosition { id, position } => {
                graph.set_position(id, position)?;
                Ok(GraphChange::PointMoved { id, position })
            }
            GraphCommand::SetWeight { a, b, weight } => {
                graph.connect(a, b, weight)?;
                Ok(GraphChange::Connected { a, b, weight })
            }
            GraphCommand::RemovePoint(id) => {
                graph.index_of(id)?;
                session.forget(id);
                graph.remove_point(id)?;
                Ok(GraphChange::PointRemoved(id))
            }
        }
    }
}
