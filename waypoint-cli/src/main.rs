//! `waypoints` binary: parse a subcommand, run it against the configured store, print the result.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use waypoint_cli::{open_store, replay_script, run_action, CliConfig, CliOptions, GraphAction, StoreKind};
use waypoint_graph::Vec3;

#[derive(Parser, Debug)]
#[command(name = "waypoints")]
#[command(about = "Edit stored waypoint graphs and replay edit sessions")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Store backend: file, memory or sqlite (overrides WAYPOINT_STORE)
    #[arg(long, global = true, value_name = "KIND")]
    store: Option<StoreKind>,

    /// Store directory or database file (overrides WAYPOINT_STORE_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    store_path: Option<String>,

    /// Snap distance in screen units for replay (overrides WAYPOINT_SNAP_DISTANCE)
    #[arg(long, global = true)]
    snap_distance: Option<f32>,

    /// Weight for new connections (overrides WAYPOINT_DEFAULT_WEIGHT)
    #[arg(long, global = true)]
    default_weight: Option<f32>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Edit(EditCommand),
    /// Replay a JSON-lines input-event script against a graph, then save it
    Replay {
        name: String,
        /// Script file, or - for stdin
        script: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum EditCommand {
    /// Create an empty graph
    New {
        name: String,
        /// Overwrite an existing graph
        #[arg(long)]
        force: bool,
    },
    /// Append a waypoint at X Y Z
    Add {
        name: String,
        #[arg(num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
        position: Vec<f32>,
    },
    /// Remove the waypoint at INDEX and its connections
    Remove { name: String, index: usize },
    /// Connect waypoints A and B
    Connect {
        name: String,
        a: usize,
        b: usize,
        /// Edge weight (default: configured default weight)
        #[arg(short, long)]
        weight: Option<f32>,
    },
    /// Remove the connection between A and B
    Disconnect { name: String, a: usize, b: usize },
    /// Move the waypoint at INDEX to X Y Z
    Move {
        name: String,
        index: usize,
        #[arg(num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
        position: Vec<f32>,
    },
    /// Print a graph
    Show {
        name: String,
        /// Print the stored JSON document instead of text
        #[arg(long)]
        json: bool,
    },
    /// List stored graphs
    List,
    /// Delete a stored graph
    Delete { name: String },
}

/// clap guarantees exactly three values.
fn vec3(values: &[f32]) -> Vec3 {
    match values {
        [x, y, z] => Vec3::new(*x, *y, *z),
        _ => Vec3::ZERO,
    }
}

impl From<EditCommand> for GraphAction {
    fn from(command: EditCommand) -> Self {
        match command {
            EditCommand::New { name, force } => GraphAction::New { name, force },
            EditCommand::Add { name, position } => GraphAction::Add {
                name,
                position: vec3(&position),
            },
            EditCommand::Remove { name, index } => GraphAction::Remove { name, index },
            EditCommand::Connect { name, a, b, weight } => {
                GraphAction::Connect { name, a, b, weight }
            }
            EditCommand::Disconnect { name, a, b } => GraphAction::Disconnect { name, a, b },
            EditCommand::Move {
                name,
                index,
                position,
            } => GraphAction::Move {
                name,
                index,
                position: vec3(&position),
            },
            EditCommand::Show { name, json } => GraphAction::Show { name, json },
            EditCommand::List => GraphAction::List,
            EditCommand::Delete { name } => GraphAction::Delete { name },
        }
    }
}

/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    dotenv::dotenv().ok();
    init_tracing(cli.global.verbose);

    let options = CliOptions {
        store: cli.global.store,
        store_path: cli.global.store_path,
        snap_distance: cli.global.snap_distance,
        default_weight: cli.global.default_weight,
        verbose: cli.global.verbose,
    };
    let mut config = match CliConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };
    config.apply_options(&options);

    let result = match open_store(&config) {
        Ok(store) => match cli.command {
            Command::Edit(command) => {
                run_action(store.as_ref(), &config, &GraphAction::from(command)).await
            }
            Command::Replay { name, script } => {
                replay_script(store.as_ref(), &config, &name, &script)
                    .await
                    .and_then(|report| Ok(serde_json::to_string_pretty(&report)?))
            }
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(out) => {
            if !out.is_empty() {
                println!("{}", out);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
