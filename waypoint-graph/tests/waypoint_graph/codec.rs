//! Codec behaviour through the JSON document form.

use serde_json::json;
use waypoint_graph::{decode, encode, FormatError, SerializedGraph, Vec3, WaypointGraph};

/// **Scenario**: Three waypoints, P0-P1 weight 2 and P1-P2 weight 3, survive a JSON trip.
#[test]
fn three_point_graph_survives_json() {
    let mut graph = WaypointGraph::new();
    let p0 = graph.add_point(Vec3::new(0.0, 0.0, 0.0));
    let p1 = graph.add_point(Vec3::new(1.0, 0.0, 0.0));
    let p2 = graph.add_point(Vec3::new(2.0, 0.0, 0.0));
    graph.connect(p0, p1, 2.0).unwrap();
    graph.connect(p1, p2, 3.0).unwrap();

    let text = serde_json::to_string(&encode(&graph)).unwrap();
    let parsed: SerializedGraph = serde_json::from_str(&text).unwrap();
    let restored = decode(&parsed).unwrap();

    assert_eq!(restored.len(), 3);
    let q: Vec<_> = restored.ids().collect();
    assert_eq!(restored.position(q[1]).unwrap(), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(restored.neighbors(q[0]).unwrap().len(), 1);
    assert_eq!(restored.neighbors(q[1]).unwrap().len(), 2);
    assert_eq!(restored.neighbors(q[2]).unwrap().len(), 1);
    assert_eq!(restored.weight(q[0], q[1]), Some(2.0));
    assert_eq!(restored.weight(q[1], q[0]), Some(2.0));
    assert_eq!(restored.weight(q[2], q[1]), Some(3.0));
    assert_eq!(restored.weight(q[0], q[2]), None);
}

/// **Scenario**: The document uses the persisted field names.
#[test]
fn document_field_names() {
    let mut graph = WaypointGraph::new();
    let a = graph.add_point(Vec3::new(1.0, 2.0, 3.0));
    let b = graph.add_point(Vec3::ZERO);
    graph.connect(a, b, 0.5).unwrap();

    let value = serde_json::to_value(encode(&graph)).unwrap();
    assert_eq!(
        value,
        json!({
            "points": [
                { "position": [1.0, 2.0, 3.0], "neighborIndex": [1], "neighborWeight": [0.5] },
                { "position": [0.0, 0.0, 0.0], "neighborIndex": [0], "neighborWeight": [0.5] }
            ]
        })
    );
}

/// **Scenario**: An out-of-range neighbor index is rejected as a whole.
#[test]
fn out_of_range_index_rejected() {
    let doc: SerializedGraph = serde_json::from_value(json!({
        "points": [
            { "position": [0.0, 0.0, 0.0], "neighborIndex": [5], "neighborWeight": [1.0] }
        ]
    }))
    .unwrap();
    assert_eq!(
        decode(&doc).unwrap_err(),
        FormatError::NeighborIndexOutOfRange {
            point: 0,
            index: 5,
            count: 1
        }
    );
}

/// **Scenario**: A one-sided edge is rejected.
#[test]
fn asymmetric_edge_rejected() {
    let doc: SerializedGraph = serde_json::from_value(json!({
        "points": [
            { "position": [0.0, 0.0, 0.0], "neighborIndex": [1], "neighborWeight": [1.0] },
            { "position": [1.0, 0.0, 0.0] }
        ]
    }))
    .unwrap();
    assert!(matches!(
        decode(&doc),
        Err(FormatError::AsymmetricEdge { point: 0, neighbor: 1 })
    ));
}

/// **Scenario**: An empty document decodes to an empty graph.
#[test]
fn empty_document() {
    let doc: SerializedGraph = serde_json::from_str(r#"{"points": []}"#).unwrap();
    assert!(decode(&doc).unwrap().is_empty());
}
