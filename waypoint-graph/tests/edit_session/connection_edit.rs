//! Connection mode: gestures create, delete or discard edges.

use waypoint_graph::{
    Color, ConnectionAction, EditConfig, EditMode, EditSession, EventResponse, Gesture,
    GraphChange, InputEvent, KeyCode, Modifiers, Vec2, Vec3, WaypointGraph, WaypointId,
};

use crate::common::RecordingSurface;

/// P0 at screen (0, 0), P1 at (100, 0), P2 at (200, 0).
fn three_in_a_row() -> (WaypointGraph, [WaypointId; 3]) {
    let mut graph = WaypointGraph::new();
    let p0 = graph.add_point(Vec3::new(0.0, 0.0, 0.0));
    let p1 = graph.add_point(Vec3::new(100.0, 0.0, 0.0));
    let p2 = graph.add_point(Vec3::new(200.0, 0.0, 0.0));
    (graph, [p0, p1, p2])
}

fn connection_session() -> EditSession {
    let mut session = EditSession::new(EditConfig::default());
    session.set_mode(EditMode::Connections);
    session
}

/// **Scenario**: Shift-drag from P0 to P2 creates a symmetric edge of weight 1.
#[test]
fn add_drag_connects_with_default_weight() {
    let (mut graph, [p0, _p1, p2]) = three_in_a_row();
    let mut session = connection_session();
    let surface = RecordingSurface::new();

    let r = session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(1.0, 0.0), Modifiers::SHIFT),
    );
    assert_eq!(r, EventResponse::Consumed);
    assert_eq!(
        session.gesture(),
        Gesture::SeekingStart {
            action: ConnectionAction::Add,
            start: Some(p0)
        }
    );

    session.handle_event(&mut graph, &surface, &InputEvent::pointer_drag(Vec2::new(150.0, 0.0)));
    session.handle_event(&mut graph, &surface, &InputEvent::pointer_drag(Vec2::new(198.0, 1.0)));
    assert_eq!(session.gesture().end(), Some(p2));

    let r = session.handle_event(&mut graph, &surface, &InputEvent::pointer_up(Vec2::new(199.0, 0.0)));
    assert_eq!(
        r,
        EventResponse::Changed(GraphChange::Connected {
            a: p0,
            b: p2,
            weight: 1.0
        })
    );
    assert_eq!(graph.weight(p0, p2), Some(1.0));
    assert_eq!(graph.weight(p2, p0), Some(1.0));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(session.gesture(), Gesture::Idle);
}

/// **Scenario**: Ctrl-drag between connected waypoints removes the edge.
#[test]
fn delete_drag_disconnects() {
    let (mut graph, [p0, p1, _p2]) = three_in_a_row();
    graph.connect(p0, p1, 4.0).unwrap();
    let mut session = connection_session();
    let surface = RecordingSurface::new();

    session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(100.0, 0.0), Modifiers::CONTROL),
    );
    session.handle_event(&mut graph, &surface, &InputEvent::pointer_drag(Vec2::new(2.0, 0.0)));
    let r = session.handle_event(&mut graph, &surface, &InputEvent::pointer_up(Vec2::new(2.0, 0.0)));

    assert_eq!(r, EventResponse::Changed(GraphChange::Disconnected { a: p1, b: p0 }));
    assert_eq!(graph.edge_count(), 0);
}

/// **Scenario**: In a fully connected triangle, ctrl-drag P0 -> P2 removes only
/// that edge; P0-P1 and P1-P2 keep their weights.
#[test]
fn delete_drag_leaves_other_edges_untouched() {
    let (mut graph, [p0, p1, p2]) = three_in_a_row();
    graph.connect(p0, p1, 2.0).unwrap();
    graph.connect(p1, p2, 3.0).unwrap();
    graph.connect(p0, p2, 7.0).unwrap();
    let mut session = connection_session();
    let surface = RecordingSurface::new();

    session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(1.0, 0.0), Modifiers::CONTROL),
    );
    session.handle_event(&mut graph, &surface, &InputEvent::pointer_drag(Vec2::new(120.0, 0.0)));
    session.handle_event(&mut graph, &surface, &InputEvent::pointer_drag(Vec2::new(197.0, 2.0)));
    let r = session.handle_event(&mut graph, &surface, &InputEvent::pointer_up(Vec2::new(198.0, 0.0)));

    assert_eq!(r, EventResponse::Changed(GraphChange::Disconnected { a: p0, b: p2 }));
    assert_eq!(graph.weight(p0, p2), None);
    assert_eq!(graph.weight(p2, p0), None);
    assert_eq!(graph.weight(p0, p1), Some(2.0));
    assert_eq!(graph.weight(p1, p0), Some(2.0));
    assert_eq!(graph.weight(p1, p2), Some(3.0));
    assert_eq!(graph.weight(p2, p1), Some(3.0));
    assert_eq!(graph.edge_count(), 2);
}

/// **Scenario**: Releasing away from every waypoint commits nothing.
#[test]
fn release_outside_snap_distance_discards() {
    let (mut graph, [p0, _p1, _p2]) = three_in_a_row();
    let mut session = connection_session();
    let surface = RecordingSurface::new();

    session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(0.0, 0.0), Modifiers::SHIFT),
    );
    session.handle_event(&mut graph, &surface, &InputEvent::pointer_drag(Vec2::new(100.0, 0.0)));
    let r = session.handle_event(&mut graph, &surface, &InputEvent::pointer_up(Vec2::new(150.0, 50.0)));

    assert_eq!(r, EventResponse::Consumed);
    assert!(graph.neighbors(p0).unwrap().is_empty());
    assert_eq!(graph.edge_count(), 0);
}

/// **Scenario**: The snap threshold is inclusive; just beyond it no start is found.
#[test]
fn snap_threshold_boundary() {
    let (mut graph, [p0, _p1, _p2]) = three_in_a_row();
    let mut session = EditSession::new(EditConfig::default().with_snap_distance(5.0));
    session.set_mode(EditMode::Connections);
    let surface = RecordingSurface::new();

    session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(5.0, 0.0), Modifiers::SHIFT),
    );
    assert_eq!(session.gesture().start(), Some(p0));
    session.handle_event(&mut graph, &surface, &InputEvent::pointer_up(Vec2::new(5.0, 0.0)));

    session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(5.5, 0.0), Modifiers::SHIFT),
    );
    assert!(session.gesture().is_active());
    assert_eq!(session.gesture().start(), None);
}

/// **Scenario**: Pressing the delete modifier mid-drag turns an add into a delete.
#[test]
fn modifier_key_switches_action_mid_gesture() {
    let (mut graph, [p0, p1, _p2]) = three_in_a_row();
    graph.connect(p0, p1, 1.0).unwrap();
    let mut session = connection_session();
    let surface = RecordingSurface::new();

    session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(0.0, 0.0), Modifiers::SHIFT),
    );
    session.handle_event(&mut graph, &surface, &InputEvent::pointer_drag(Vec2::new(99.0, 0.0)));
    let r = session.handle_event(&mut graph, &surface, &InputEvent::key_down(KeyCode::LeftControl));
    assert_eq!(r, EventResponse::Consumed);
    assert_eq!(session.gesture().action(), Some(ConnectionAction::Delete));

    session.handle_event(&mut graph, &surface, &InputEvent::pointer_up(Vec2::new(100.0, 0.0)));
    assert_eq!(graph.edge_count(), 0);
}

/// **Scenario**: Releasing without dragging commits nothing even over a waypoint.
#[test]
fn click_without_drag_commits_nothing() {
    let (mut graph, _ids) = three_in_a_row();
    let mut session = connection_session();
    let surface = RecordingSurface::new();

    session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(0.0, 0.0), Modifiers::SHIFT),
    );
    let r = session.handle_event(&mut graph, &surface, &InputEvent::pointer_up(Vec2::new(0.0, 0.0)));
    assert_eq!(r, EventResponse::Consumed);
    assert_eq!(graph.edge_count(), 0);
}

/// **Scenario**: Connection mode draws spheres, edges and the coloured drag line.
#[test]
fn draws_spheres_and_drag_line() {
    let (mut graph, [p0, _p1, p2]) = three_in_a_row();
    let mut session = connection_session();
    let mut surface = RecordingSurface::new();

    session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(0.0, 0.0), Modifiers::SHIFT),
    );
    session.handle_event(&mut graph, &surface, &InputEvent::pointer_drag(Vec2::new(50.0, 30.0)));
    let moved = session.draw(&mut graph, &mut surface);
    assert!(moved.is_empty());
    assert_eq!(surface.spheres.len(), 3);
    assert!(surface.spheres.iter().all(|&(_, r, c)| r == 0.75 && c == Color::WHITE));

    // No end yet: the line runs to the pointer ray origin.
    let from = graph.position(p0).unwrap();
    assert_eq!(
        surface.lines.last().copied(),
        Some((from, Vec3::new(50.0, 10.0, 30.0), Color::BLUE))
    );

    surface.clear();
    session.handle_event(&mut graph, &surface, &InputEvent::pointer_drag(Vec2::new(200.0, 0.0)));
    session.draw(&mut graph, &mut surface);
    assert_eq!(
        surface.lines.last().copied(),
        Some((from, graph.position(p2).unwrap(), Color::BLUE))
    );
}
