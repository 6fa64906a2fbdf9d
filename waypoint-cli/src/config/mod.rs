//! Configuration types for the CLI.
//!
//! Re-exports [`CliConfig`], [`CliOptions`], [`StoreKind`] and config [`Error`].

mod cli_config;
mod cli_options;
mod store_kind;

pub use cli_config::{CliConfig, Error};
pub use cli_options::CliOptions;
pub use store_kind::StoreKind;
