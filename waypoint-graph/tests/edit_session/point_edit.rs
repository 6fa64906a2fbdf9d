//! Point mode: placement, gizmo moves and edge drawing.

use waypoint_graph::{
    Color, EditConfig, EditSession, EventResponse, GraphChange, InputEvent, Modifiers, Vec2, Vec3,
    WaypointGraph,
};

use crate::common::RecordingSurface;

/// **Scenario**: Shift-click over scene geometry places a waypoint at the hit.
#[test]
fn shift_click_places_at_hit() {
    let mut graph = WaypointGraph::new();
    let mut session = EditSession::default();
    let mut surface = RecordingSurface::new();
    surface.hit = Some(Vec3::new(3.0, 0.5, 4.0));

    let r = session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(3.0, 4.0), Modifiers::SHIFT),
    );
    let Some(GraphChange::PointAdded(id)) = r.change() else {
        panic!("expected PointAdded, got {:?}", r);
    };
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.position(id).unwrap(), Vec3::new(3.0, 0.5, 4.0));
}

/// **Scenario**: With no hit the waypoint goes a fixed distance along the pointer ray.
#[test]
fn shift_click_without_hit_uses_fallback_distance() {
    let mut graph = WaypointGraph::new();
    let mut session = EditSession::new(EditConfig::default().with_fallback_distance(4.0));
    let surface = RecordingSurface::new();

    session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(1.0, 2.0), Modifiers::SHIFT),
    );
    let id = graph.id_at(0).unwrap();
    assert_eq!(graph.position(id).unwrap(), Vec3::new(1.0, 6.0, 2.0));
}

/// **Scenario**: Shift-click within snap distance of an existing waypoint adds
/// nothing; a click clear of it still adds.
#[test]
fn shift_click_on_existing_waypoint_ignored() {
    let mut graph = WaypointGraph::new();
    graph.add_point(Vec3::new(10.0, 0.0, 10.0));
    let mut session = EditSession::default();
    let mut surface = RecordingSurface::new();
    surface.hit = Some(Vec3::new(12.0, 0.0, 13.0));

    let r = session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(12.0, 13.0), Modifiers::SHIFT),
    );
    assert_eq!(r, EventResponse::Ignored);
    assert_eq!(graph.len(), 1);

    surface.hit = Some(Vec3::new(40.0, 0.0, 10.0));
    let r = session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(40.0, 10.0), Modifiers::SHIFT),
    );
    assert!(matches!(r.change(), Some(GraphChange::PointAdded(_))));
    assert_eq!(graph.len(), 2);
}

/// **Scenario**: A plain click in point mode is left to the host.
#[test]
fn plain_click_ignored() {
    let mut graph = WaypointGraph::new();
    let mut session = EditSession::default();
    let surface = RecordingSurface::new();
    let r = session.handle_event(
        &mut graph,
        &surface,
        &InputEvent::pointer_down(Vec2::new(0.0, 0.0), Modifiers::NONE),
    );
    assert_eq!(r, EventResponse::Ignored);
    assert!(graph.is_empty());
}

/// **Scenario**: A gizmo drag is written back to the graph and reported.
#[test]
fn gizmo_moves_written_back() {
    let mut graph = WaypointGraph::new();
    let a = graph.add_point(Vec3::ZERO);
    let b = graph.add_point(Vec3::new(1.0, 0.0, 0.0));
    let session = EditSession::default();
    let mut surface = RecordingSurface::new();
    surface.moves.insert(b, Vec3::new(1.0, 2.0, 0.0));

    let moved = session.draw(&mut graph, &mut surface);
    assert_eq!(surface.handles, vec![a, b]);
    assert_eq!(
        moved,
        vec![GraphChange::PointMoved {
            id: b,
            position: Vec3::new(1.0, 2.0, 0.0)
        }]
    );
    assert_eq!(graph.position(b).unwrap(), Vec3::new(1.0, 2.0, 0.0));
    assert_eq!(graph.position(a).unwrap(), Vec3::ZERO);
}

/// **Scenario**: Each edge is drawn once with its weight at the midpoint.
#[test]
fn edges_drawn_once_with_labels() {
    let mut graph = WaypointGraph::new();
    let a = graph.add_point(Vec3::ZERO);
    let b = graph.add_point(Vec3::new(2.0, 0.0, 0.0));
    let c = graph.add_point(Vec3::new(2.0, 0.0, 2.0));
    graph.connect(a, b, 1.5).unwrap();
    graph.connect(b, c, 2.0).unwrap();
    let session = EditSession::default();
    let mut surface = RecordingSurface::new();

    session.draw(&mut graph, &mut surface);
    assert_eq!(surface.lines.len(), 2);
    assert!(surface.lines.iter().all(|&(_, _, color)| color == Color::WHITE));
    assert_eq!(
        surface.labels,
        vec![
            (Vec3::new(1.0, 0.0, 0.0), "1.5".to_string()),
            (Vec3::new(2.0, 0.0, 1.0), "2".to_string()),
        ]
    );
    assert!(surface.spheres.is_empty());
}
