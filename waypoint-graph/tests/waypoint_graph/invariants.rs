//! Graph invariants hold after every sequence of public edits.

use waypoint_graph::{GraphError, Vec3, WaypointGraph, WaypointId};

/// Every listed neighbor is present and lists the waypoint back with the same weight.
fn assert_consistent(graph: &WaypointGraph) {
    for point in graph.waypoints() {
        for (&other, &weight) in point.neighbors() {
            assert_ne!(other, point.id(), "self-loop on {}", point.id());
            assert!(graph.contains(other), "dangling neighbor {}", other);
            assert_eq!(
                graph.weight(other, point.id()),
                Some(weight),
                "asymmetric edge {} -> {}",
                point.id(),
                other
            );
        }
    }
}

fn line_of(n: usize) -> (WaypointGraph, Vec<WaypointId>) {
    let mut graph = WaypointGraph::new();
    let ids = (0..n)
        .map(|i| graph.add_point(Vec3::new(i as f32, 0.0, 0.0)))
        .collect();
    (graph, ids)
}

/// **Scenario**: Connect, reconnect, disconnect and remove keep the graph symmetric.
#[test]
fn mixed_edits_keep_graph_consistent() {
    let (mut graph, ids) = line_of(5);
    graph.connect(ids[0], ids[1], 1.0).unwrap();
    graph.connect(ids[1], ids[2], 2.0).unwrap();
    graph.connect(ids[2], ids[0], 3.0).unwrap();
    graph.connect(ids[3], ids[4], 4.0).unwrap();
    assert_consistent(&graph);

    graph.connect(ids[1], ids[0], 9.0).unwrap();
    assert_eq!(graph.weight(ids[0], ids[1]), Some(9.0));
    assert_consistent(&graph);

    assert!(graph.disconnect(ids[2], ids[1]).unwrap());
    assert!(!graph.disconnect(ids[2], ids[1]).unwrap());
    assert_consistent(&graph);

    graph.remove_point(ids[0]).unwrap();
    assert_consistent(&graph);
    assert_eq!(graph.len(), 4);
    assert_eq!(graph.edge_count(), 1);
}

/// **Scenario**: Removing a waypoint shifts later indices but keeps their handles.
#[test]
fn removal_shifts_indices_keeps_handles() {
    let (mut graph, ids) = line_of(4);
    graph.connect(ids[2], ids[3], 5.0).unwrap();
    graph.remove_point(ids[1]).unwrap();

    assert_eq!(graph.index_of(ids[2]).unwrap(), 1);
    assert_eq!(graph.index_of(ids[3]).unwrap(), 2);
    assert_eq!(graph.weight(ids[2], ids[3]), Some(5.0));
    assert_eq!(graph.position(ids[3]).unwrap(), Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(graph.index_of(ids[1]), Err(GraphError::InvalidHandle(ids[1])));
}

/// **Scenario**: Failed edits leave the graph untouched.
#[test]
fn failed_edits_do_not_mutate() {
    let (mut graph, ids) = line_of(2);
    let (other, foreign) = line_of(1);
    drop(other);

    assert_eq!(graph.connect(ids[0], ids[0], 1.0), Err(GraphError::SelfLoop(ids[0])));
    assert_eq!(
        graph.connect(ids[0], foreign[0], 1.0),
        Err(GraphError::InvalidHandle(foreign[0]))
    );
    assert_eq!(graph.edge_count(), 0);
    assert_consistent(&graph);
}

/// **Scenario**: Handles are never reused after removal.
#[test]
fn handles_not_reused() {
    let (mut graph, ids) = line_of(1);
    graph.remove_point(ids[0]).unwrap();
    let fresh = graph.add_point(Vec3::ZERO);
    assert_ne!(fresh, ids[0]);
    assert!(!graph.contains(ids[0]));
}

/// **Scenario**: edges() reports each undirected edge once, lower index first.
#[test]
fn edges_reported_once() {
    let (mut graph, ids) = line_of(3);
    graph.connect(ids[2], ids[0], 1.5).unwrap();
    graph.connect(ids[1], ids[2], 2.5).unwrap();
    let edges = graph.edges();
    assert_eq!(edges.len(), 2);
    assert_eq!((edges[0].a, edges[0].b, edges[0].weight), (ids[0], ids[2], 1.5));
    assert_eq!((edges[1].a, edges[1].b, edges[1].weight), (ids[1], ids[2], 2.5));
}
