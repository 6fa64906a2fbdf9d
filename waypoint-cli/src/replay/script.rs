//! Event scripts: one JSON [`InputEvent`] per line, replayed through an
//! [`EditSession`] against a [`ReplaySurface`].
//!
//! Blank lines and lines starting with `#` are skipped. After every event the
//! session draws one frame, as an editor would.

use std::path::Path;

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tokio_stream::{Stream, StreamExt};
use waypoint_graph::{
    load_graph, save_graph, EditSession, EventResponse, GraphStore, InputEvent, StoreError,
    WaypointGraph,
};

use crate::config::{CliConfig, Error};

use super::surface::{DrawStats, ReplaySurface};

/// Outcome of one replay.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Events read (comments and blank lines excluded).
    pub events: usize,
    pub ignored: usize,
    pub consumed: usize,
    /// Graph or mode changes, including gizmo moves reported by drawing.
    pub changes: usize,
    /// Waypoint count after the replay.
    pub points: usize,
    /// Connection count after the replay.
    pub connections: usize,
    /// Final edit mode.
    pub mode: String,
    pub draw: DrawStats,
}

impl ReplayReport {
    fn record(&mut self, response: EventResponse) {
        self.events += 1;
        match response {
            EventResponse::Ignored => self.ignored += 1,
            EventResponse::Consumed => self.consumed += 1,
            EventResponse::Changed(_) => {
                self.consumed += 1;
                self.changes += 1;
            }
        }
    }
}

/// Replays every line of `lines` into `session` editing `graph`.
///
/// Stops at the first line that is not a valid event, reporting its line number.
pub async fn replay_lines<S>(
    graph: &mut WaypointGraph,
    session: &mut EditSession,
    surface: &mut ReplaySurface,
    mut lines: S,
) -> Result<ReplayReport, Error>
where
    S: Stream<Item = std::io::Result<String>> + Unpin,
{
    let mut report = ReplayReport::default();
    let mut line_no = 0usize;
    while let Some(line) = lines.next().await {
        line_no += 1;
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let event: InputEvent =
            serde_json::from_str(text).map_err(|e| format!("line {}: {}", line_no, e))?;
        let response = session.handle_event(graph, &*surface, &event);
        tracing::debug!(line = line_no, ?response, "Replayed event");
        report.record(response);
        report.changes += session.draw(graph, &mut *surface).len();
    }
    report.points = graph.len();
    report.connections = graph.edge_count();
    report.mode = format!("{:?}", session.mode());
    report.draw = surface.stats();
    Ok(report)
}

/// Replays the script at `path` (or stdin for `-`) against the stored graph
/// `name`, then saves it. A missing graph starts empty.
pub async fn replay_script(
    store: &dyn GraphStore,
    config: &CliConfig,
    name: &str,
    path: &Path,
) -> Result<ReplayReport, Error> {
    let mut graph = match load_graph(store, name).await {
        Ok(graph) => graph,
        Err(StoreError::NotFound(_)) => WaypointGraph::new(),
        Err(e) => return Err(e.into()),
    };
    let mut session = EditSession::new(config.edit.clone());
    let mut surface = ReplaySurface::default();

    let report = if path == Path::new("-") {
        let lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
        replay_lines(&mut graph, &mut session, &mut surface, lines).await?
    } else {
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        let lines = LinesStream::new(BufReader::new(file).lines());
        replay_lines(&mut graph, &mut session, &mut surface, lines).await?
    };

    save_graph(store, name, &graph).await?;
    tracing::info!(name, events = report.events, changes = report.changes, "Replay saved");
    Ok(report)
}
