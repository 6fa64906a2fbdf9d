//! Edit session: turns input events into graph edits and draw requests.
//!
//! Two modes, switched by the toggle key or [`EditSession::toggle_mode`]:
//!
//! - **Points**: each waypoint gets a position gizmo whose result is written
//!   back immediately; add-modifier click places a new waypoint at the
//!   pointer's scene hit (or a fixed distance along the pointer ray).
//! - **Connections**: an add- or delete-modifier pointer-down starts a gesture
//!   (`Idle -> SeekingStart`), dragging fixes the start and seeks an end
//!   (`-> Dragging`), and pointer-up commits `connect` / `disconnect` when both
//!   ends resolved, then returns to `Idle`.
//!
//! The session borrows the graph per call; it never owns it.

use crate::error::GraphError;
use crate::geometry::{Color, Vec2, Vec3};
use crate::graph::{WaypointGraph, WaypointId};
use crate::logging;

use super::config::EditConfig;
use super::gesture::{nearest_within, ConnectionAction, Gesture};
use super::input::{InputEvent, PointerButton};
use super::surface::Surface;

/// Top-level editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Points,
    Connections,
}

impl EditMode {
    pub fn toggled(self) -> EditMode {
        match self {
            EditMode::Points => EditMode::Connections,
            EditMode::Connections => EditMode::Points,
        }
    }
}

/// A change made to the graph (or session mode) by an event or command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphChange {
    PointAdded(WaypointId),
    PointRemoved(WaypointId),
    PointMoved { id: WaypointId, position: Vec3 },
    Connected { a: WaypointId, b: WaypointId, weight: f32 },
    Disconnected { a: WaypointId, b: WaypointId },
    ModeChanged(EditMode),
}

/// How the session treated one input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventResponse {
    /// Not for this session; the host may pass it on.
    Ignored,
    /// Used by the session without changing the graph.
    Consumed,
    /// Used by the session and changed the graph or mode.
    Changed(GraphChange),
}

impl EventResponse {
    pub fn is_consumed(&self) -> bool {
        !matches!(self, EventResponse::Ignored)
    }

    pub fn change(&self) -> Option<GraphChange> {
        match *self {
            EventResponse::Changed(change) => Some(change),
            _ => None,
        }
    }
}

/// Interactive editing state for one graph.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    config: EditConfig,
    mode: EditMode,
    gesture: Gesture,
    /// Last pointer position seen; the drag line falls back to its ray origin.
    pointer: Option<Vec2>,
}

impl EditSession {
    pub fn new(config: EditConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Switches mode; any in-progress gesture is discarded without committing.
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.gesture.is_active() {
            logging::log_gesture_discarded("mode switched");
        }
        self.gesture = Gesture::Idle;
        if self.mode != mode {
            self.mode = mode;
            logging::log_mode_changed(mode);
        }
    }

    pub fn toggle_mode(&mut self) -> EditMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Drops gesture references to a waypoint that is being removed.
    pub fn forget(&mut self, id: WaypointId) {
        self.gesture = self.gesture.without(id);
    }

    /// Processes one input event to completion.
    pub fn handle_event(
        &mut self,
        graph: &mut WaypointGraph,
        surface: &dyn Surface,
        event: &InputEvent,
    ) -> EventResponse {
        if let InputEvent::KeyDown { key, .. } = *event {
            if key == self.config.toggle_key {
                let mode = self.toggle_mode();
                return EventResponse::Changed(GraphChange::ModeChanged(mode));
            }
        }
        if let Some(position) = event.pointer_position() {
            self.pointer = Some(position);
        }
        match self.mode {
            EditMode::Points => self.handle_point_event(graph, surface, event),
            EditMode::Connections => self.handle_connection_event(graph, surface, event),
        }
    }

    fn handle_point_event(
        &mut self,
        graph: &mut WaypointGraph,
        surface: &dyn Surface,
        event: &InputEvent,
    ) -> EventResponse {
        match *event {
            InputEvent::PointerDown {
                button: PointerButton::Primary,
                position,
                modifiers,
            } if modifiers.contains(self.config.add_modifier) => {
                // Clicks on an existing waypoint belong to its gizmo.
                if self.snap(graph, surface, position, None).is_some() {
                    return EventResponse::Ignored;
                }
                let world = surface.raycast_hit(position).unwrap_or_else(|| {
                    surface
                        .pointer_ray(position)
                        .point_at(self.config.fallback_distance)
                });
                let id = graph.add_point(world);
                EventResponse::Changed(GraphChange::PointAdded(id))
            }
            _ => EventResponse::Ignored,
        }
    }

    fn handle_connection_event(
        &mut self,
        graph: &mut WaypointGraph,
        surface: &dyn Surface,
        event: &InputEvent,
    ) -> EventResponse {
        match *event {
            InputEvent::PointerDown {
                button: PointerButton::Primary,
                position,
                modifiers,
            } => {
                let action = if modifiers.contains(self.config.add_modifier) {
                    ConnectionAction::Add
                } else if modifiers.contains(self.config.delete_modifier) {
                    ConnectionAction::Delete
                } else {
                    return EventResponse::Ignored;
                };
                let start = self.snap(graph, surface, position, None);
                self.gesture = Gesture::SeekingStart { action, start };
                logging::log_gesture_started(action, start);
                EventResponse::Consumed
            }
            InputEvent::PointerDrag {
                button: PointerButton::Primary,
                position,
                ..
            } => match self.gesture {
                Gesture::Idle => EventResponse::Ignored,
                Gesture::SeekingStart { action, start } | Gesture::Dragging { action, start, .. } => {
                    let end = self.snap(graph, surface, position, start);
                    self.gesture = Gesture::Dragging { action, start, end };
                    EventResponse::Consumed
                }
            },
            InputEvent::PointerUp {
                button: PointerButton::Primary,
                position,
                ..
            } => {
                let gesture = std::mem::take(&mut self.gesture);
                match gesture {
                    Gesture::Idle => EventResponse::Ignored,
                    Gesture::SeekingStart { .. } => {
                        logging::log_gesture_discarded("released before dragging");
                        EventResponse::Consumed
                    }
                    Gesture::Dragging { action, start, .. } => {
                        let end = self.snap(graph, surface, position, start);
                        match (start, end) {
                            (Some(start), Some(end)) => self.commit(graph, action, start, end),
                            _ => {
                                logging::log_gesture_discarded("no waypoint under an endpoint");
                                EventResponse::Consumed
                            }
                        }
                    }
                }
            }
            InputEvent::KeyDown { key, .. } if self.gesture.is_active() => {
                let action = match key.modifier() {
                    Some(m) if m == self.config.add_modifier => ConnectionAction::Add,
                    Some(m) if m == self.config.delete_modifier => ConnectionAction::Delete,
                    _ => return EventResponse::Ignored,
                };
                self.gesture = self.gesture.with_action(action);
                EventResponse::Consumed
            }
            _ => EventResponse::Ignored,
        }
    }

    fn snap(
        &self,
        graph: &WaypointGraph,
        surface: &dyn Surface,
        pointer: Vec2,
        exclude: Option<WaypointId>,
    ) -> Option<WaypointId> {
        nearest_within(graph, surface, pointer, self.config.snap_distance, exclude)
    }

    fn commit(
        &self,
        graph: &mut WaypointGraph,
        action: ConnectionAction,
        start: WaypointId,
        end: WaypointId,
    ) -> EventResponse {
        let result: Result<Option<GraphChange>, GraphError> = match action {
            ConnectionAction::Add => graph
                .connect(start, end, self.config.default_weight)
                .map(|()| {
                    Some(GraphChange::Connected {
                        a: start,
                        b: end,
                        weight: self.config.default_weight,
                    })
                }),
            ConnectionAction::Delete => graph.disconnect(start, end).map(|removed| {
                removed.then_some(GraphChange::Disconnected { a: start, b: end })
            }),
        };
        match result {
            Ok(Some(change)) => EventResponse::Changed(change),
            Ok(None) => EventResponse::Consumed,
            Err(e) => {
                logging::log_gesture_rejected(&e);
                EventResponse::Consumed
            }
        }
    }

    /// Issues this frame's draw requests.
    ///
    /// In point mode this also runs the position gizmos and writes any moved
    /// position back to the graph; the moves are returned.
    pub fn draw(&self, graph: &mut WaypointGraph, surface: &mut dyn Surface) -> Vec<GraphChange> {
        let mut moved = Vec::new();
        match self.mode {
            EditMode::Points => {
                let ids: Vec<WaypointId> = graph.ids().collect();
                for id in ids {
                    let Ok(current) = graph.position(id) else {
                        continue;
                    };
                    let edited = surface.position_handle(id, current);
                    if edited != current && graph.set_position(id, edited).is_ok() {
                        moved.push(GraphChange::PointMoved {
                            id,
                            position: edited,
                        });
                    }
                }
                draw_edges(graph, surface);
            }
            EditMode::Connections => {
                for point in graph.waypoints() {
                    surface.draw_sphere(point.position(), self.config.sphere_radius, Color::WHITE);
                }
                draw_edges(graph, surface);
                self.draw_drag_line(graph, surface);
            }
        }
        moved
    }

    fn draw_drag_line(&self, graph: &WaypointGraph, surface: &mut dyn Surface) {
        let (Some(action), Some(start)) = (self.gesture.action(), self.gesture.start()) else {
            return;
        };
        let Ok(from) = graph.position(start) else {
            return;
        };
        let to = match self.gesture.end().and_then(|end| graph.position(end).ok()) {
            Some(end) => end,
            None => match self.pointer {
                Some(pointer) => surface.pointer_ray(pointer).origin,
                None => return,
            },
        };
        surface.draw_line(from, to, action.color());
    }
}

/// Each undirected edge once, labelled with its weight at the midpoint.
fn draw_edges(graph: &WaypointGraph, surface: &mut dyn Surface) {
    for edge in graph.edges() {
        let (Ok(a), Ok(b)) = (graph.position(edge.a), graph.position(edge.b)) else {
            continue;
        };
        surface.draw_line(a, b, Color::WHITE);
        surface.draw_label(a.lerp(b, 0.5), &edge.weight.to_string());
    }
}
