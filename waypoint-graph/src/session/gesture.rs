//! Connection gesture state and the screen-space snap search.

use crate::geometry::{Color, Vec2};
use crate::graph::{WaypointGraph, WaypointId};

use super::surface::Surface;

/// What releasing the current gesture does to the edge between its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionAction {
    Add,
    Delete,
}

impl ConnectionAction {
    /// Drag line colour for this action.
    pub fn color(self) -> Color {
        match self {
            ConnectionAction::Add => Color::BLUE,
            ConnectionAction::Delete => Color::RED,
        }
    }
}

/// Connection-edit gesture: pointer-down -> optional drag -> pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Pointer is down; `start` tracks the waypoint under the pointer.
    SeekingStart {
        action: ConnectionAction,
        start: Option<WaypointId>,
    },
    /// Pointer is dragging; `start` is fixed, `end` is re-resolved every update.
    Dragging {
        action: ConnectionAction,
        start: Option<WaypointId>,
        end: Option<WaypointId>,
    },
}

impl Gesture {
    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }

    pub fn action(&self) -> Option<ConnectionAction> {
        match *self {
            Gesture::Idle => None,
            Gesture::SeekingStart { action, .. } | Gesture::Dragging { action, .. } => Some(action),
        }
    }

    pub fn start(&self) -> Option<WaypointId> {
        match *self {
            Gesture::Idle => None,
            Gesture::SeekingStart { start, .. } | Gesture::Dragging { start, .. } => start,
        }
    }

    pub fn end(&self) -> Option<WaypointId> {
        match *self {
            Gesture::Dragging { end, .. } => end,
            _ => None,
        }
    }

    /// Same state with a different pending action.
    pub(crate) fn with_action(self, new_action: ConnectionAction) -> Gesture {
        match self {
            Gesture::Idle => Gesture::Idle,
            Gesture::SeekingStart { start, .. } => Gesture::SeekingStart {
                action: new_action,
                start,
            },
            Gesture::Dragging { start, end, .. } => Gesture::Dragging {
                action: new_action,
                start,
                end,
            },
        }
    }

    /// Same state with every reference to `id` cleared.
    pub(crate) fn without(self, id: WaypointId) -> Gesture {
        let keep = |c: Option<WaypointId>| c.filter(|&x| x != id);
        match self {
            Gesture::Idle => Gesture::Idle,
            Gesture::SeekingStart { action, start } => Gesture::SeekingStart {
                action,
                start: keep(start),
            },
            Gesture::Dragging { action, start, end } => Gesture::Dragging {
                action,
                start: keep(start),
                end: keep(end),
            },
        }
    }
}

/// Nearest visible waypoint to `pointer` within `threshold` screen units.
///
/// Scans in graph order and only replaces the best on a strictly smaller
/// distance, so exact ties go to the earlier waypoint. `exclude` is skipped.
pub fn nearest_within(
    graph: &WaypointGraph,
    surface: &dyn Surface,
    pointer: Vec2,
    threshold: f32,
    exclude: Option<WaypointId>,
) -> Option<WaypointId> {
    let mut best: Option<(WaypointId, f32)> = None;
    for point in graph.waypoints() {
        if Some(point.id()) == exclude {
            continue;
        }
        let Some(screen) = surface.project(point.position()) else {
            continue;
        };
        let dist = screen.distance(pointer);
        if dist > threshold {
            continue;
        }
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((point.id(), dist));
        }
    }
    best.map(|(id, _)| id)
}
