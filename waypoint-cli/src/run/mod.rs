//! Command entry points: run one [`GraphAction`] against the configured store.
//!
//! Re-exports [`run`], [`run_with_options`], [`run_with_config`], [`run_action`],
//! [`open_store`], [`format_graph`] and [`Error`].

pub use crate::config::Error;

mod open_store;
mod show;

use waypoint_graph::{
    encode, load_graph, save_graph, GraphStore, StoreError, Vec3, WaypointGraph, WaypointId,
};

use crate::config::{CliConfig, CliOptions};

pub use open_store::open_store;
pub use show::format_graph;
use show::format_position;

/// One store-backed edit or query. Waypoints are addressed by their current index.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphAction {
    /// Create an empty graph; fails if it exists unless `force`.
    New { name: String, force: bool },
    /// Append a waypoint.
    Add { name: String, position: Vec3 },
    /// Remove the waypoint at `index` and its connections.
    Remove { name: String, index: usize },
    /// Connect two waypoints; `weight` defaults to the configured default weight.
    Connect {
        name: String,
        a: usize,
        b: usize,
        weight: Option<f32>,
    },
    Disconnect { name: String, a: usize, b: usize },
    Move {
        name: String,
        index: usize,
        position: Vec3,
    },
    /// Print the graph as text, or as the stored JSON document when `json`.
    Show { name: String, json: bool },
    /// Print stored graph names.
    List,
    /// Remove a stored graph.
    Delete { name: String },
}

/// Run with config from env (and .env).
pub async fn run(action: &GraphAction) -> Result<String, Error> {
    dotenv::dotenv().ok();
    let config = CliConfig::from_env()?;
    run_with_config(&config, action).await
}

/// Run with config from env and overrides applied.
pub async fn run_with_options(action: &GraphAction, options: &CliOptions) -> Result<String, Error> {
    dotenv::dotenv().ok();
    let mut config = CliConfig::from_env()?;
    config.apply_options(options);
    run_with_config(&config, action).await
}

/// Run with given config; does not read .env. Returns the text to print.
pub async fn run_with_config(config: &CliConfig, action: &GraphAction) -> Result<String, Error> {
    let store = open_store(config)?;
    run_action(store.as_ref(), config, action).await
}

/// Run `action` against `store`.
pub async fn run_action(
    store: &dyn GraphStore,
    config: &CliConfig,
    action: &GraphAction,
) -> Result<String, Error> {
    match action {
        GraphAction::New { name, force } => {
            if !force && store.get(name).await?.is_some() {
                return Err(format!("graph already exists: {} (use --force)", name).into());
            }
            save_graph(store, name, &WaypointGraph::new()).await?;
            Ok(format!("created {}", name))
        }
        GraphAction::Add { name, position } => {
            let mut graph = load_graph(store, name).await?;
            let id = graph.add_point(*position);
            let index = graph.index_of(id)?;
            save_graph(store, name, &graph).await?;
            Ok(format!("added Point {} at {}", index, format_position(*position)))
        }
        GraphAction::Remove { name, index } => {
            let mut graph = load_graph(store, name).await?;
            let id = id_at(&graph, *index)?;
            let position = graph.remove_point(id)?;
            save_graph(store, name, &graph).await?;
            Ok(format!("removed Point {} at {}", index, format_position(position)))
        }
        GraphAction::Connect { name, a, b, weight } => {
            let mut graph = load_graph(store, name).await?;
            let weight = weight.unwrap_or(config.edit.default_weight);
            graph.connect(id_at(&graph, *a)?, id_at(&graph, *b)?, weight)?;
            save_graph(store, name, &graph).await?;
            Ok(format!("connected Point {} <-> Point {} weight {}", a, b, weight))
        }
        GraphAction::Disconnect { name, a, b } => {
            let mut graph = load_graph(store, name).await?;
            let removed = graph.disconnect(id_at(&graph, *a)?, id_at(&graph, *b)?)?;
            if !removed {
                return Ok(format!("Point {} and Point {} are not connected", a, b));
            }
            save_graph(store, name, &graph).await?;
            Ok(format!("disconnected Point {} <-> Point {}", a, b))
        }
        GraphAction::Move {
            name,
            index,
            position,
        } => {
            let mut graph = load_graph(store, name).await?;
            graph.set_position(id_at(&graph, *index)?, *position)?;
            save_graph(store, name, &graph).await?;
            Ok(format!("moved Point {} to {}", index, format_position(*position)))
        }
        GraphAction::Show { name, json } => {
            let graph = load_graph(store, name).await?;
            if *json {
                Ok(serde_json::to_string_pretty(&encode(&graph))?)
            } else {
                Ok(format_graph(&graph))
            }
        }
        GraphAction::List => Ok(store.list().await?.join("\n")),
        GraphAction::Delete { name } => {
            if store.delete(name).await? {
                Ok(format!("deleted {}", name))
            } else {
                Err(StoreError::NotFound(name.clone()).into())
            }
        }
    }
}

fn id_at(graph: &WaypointGraph, index: usize) -> Result<WaypointId, Error> {
    graph.id_at(index).ok_or_else(|| {
        format!(
            "no waypoint at index {} (graph has {})",
            index,
            graph.len()
        )
        .into()
    })
}
