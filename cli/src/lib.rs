//! graph-matrix CLI: reads a graph from a prompt or the command line, runs
//! it through graph-matrix-core and renders the result as text tables or JSON.

pub mod commands;
pub mod error;
pub mod parse;
pub mod render;
pub mod settings;

pub use error::{CliError, CliResult};
pub use settings::{Format, OutputArgs, Settings};
