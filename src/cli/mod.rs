//! Command-line interface for chirp.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
