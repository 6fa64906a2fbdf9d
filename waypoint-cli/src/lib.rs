//! waypoint-cli library: store-backed graph commands and headless session replay.
//!
//! Reads store and edit config from env / .env, opens the configured
//! [`GraphStore`](waypoint_graph::GraphStore), and runs one [`GraphAction`] or
//! replays an input-event script.
//!
//! ## Usage
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), waypoint_cli::Error> {
//! use waypoint_cli::GraphAction;
//!
//! let out = waypoint_cli::run(&GraphAction::Show { name: "patrol".into(), json: false }).await?;
//! println!("{}", out);
//! # Ok(())
//! # }
//! ```

mod config;
mod replay;
mod run;

pub use config::{CliConfig, CliOptions, Error, StoreKind};
pub use replay::{replay_lines, replay_script, DrawStats, ReplayReport, ReplaySurface};
pub use run::{
    format_graph, open_store, run, run_action, run_with_config, run_with_options, GraphAction,
};

#[cfg(test)]
mod tests;
