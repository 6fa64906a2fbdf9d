//! Headless replay of recorded edit-session input.
//!
//! Re-exports [`ReplaySurface`], [`DrawStats`], [`ReplayReport`],
//! [`replay_lines`] and [`replay_script`].

mod script;
mod surface;

pub use script::{replay_lines, replay_script, ReplayReport};
pub use surface::{DrawStats, ReplaySurface};
