//! CLI module
//!
//! Singer-style command line for the tap.
//!
//! # Modes
//!
//! - `--about` - Print name, version, capabilities and settings
//! - `--discover` - Print the stream catalog
//! - default - Sync the selected streams to stdout

mod commands;
mod runner;

pub use commands::{Cli, OutputFormat};
pub use runner::Runner;
