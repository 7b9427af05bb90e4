//! Machim CLI library
//!
//! Command-line interface over the machim sentence splitter: file/stdin
//! input, text/JSON/TSV output, and split configuration flags.

pub mod cli;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, OutputFormat};
pub use error::{CliError, CliResult};
