//! Text rendering of a graph for `waypoints show`.

use waypoint_graph::{InspectorState, Vec3, WaypointGraph};

/// One block per waypoint in inspector order: `Point i (x, y, z)` followed by
/// an indented `-> Point j  weight w` line per connection.
pub fn format_graph(graph: &WaypointGraph) -> String {
    let mut inspector = InspectorState::new();
    inspector.sync(graph);
    for id in graph.ids() {
        let _ = inspector.set_connections_expanded(id, true);
    }

    let mut out = format!(
        "{} waypoints, {} connections\n",
        graph.len(),
        graph.edge_count()
    );
    for row in inspector.rows(graph) {
        out.push_str(&format!("{} {}\n", row.label, format_position(row.position)));
        for conn in row.connections.unwrap_or_default() {
            out.push_str(&format!("  -> {}  weight {}\n", conn.label, conn.weight));
        }
    }
    out
}

/// `(x, y, z)` with shortest float formatting.
pub(crate) fn format_position(p: Vec3) -> String {
    format!("({}, {}, {})", p.x, p.y, p.z)
}
