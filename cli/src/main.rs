//! graph-matrix - analyze a small graph given as a vertex count and edge list.
//!
//! # Commands
//!
//! - `graph-matrix [interactive]` - prompt for the vertex count and edges
//! - `graph-matrix analyze -n <N> -e <EDGES>` - analyze an edge list given as a flag
//! - `graph-matrix args <N> <EDGE>... -1` - edges as separate arguments, `-1` terminated
//! - `graph-matrix path -n <N> -e <EDGES> --from <A> --to <B>` - print one shortest route
//!
//! Edges are written `a-b` (undirected) or `a->b` (directed), comma-separated.
//!
//! # Examples
//!
//! ```bash
//! graph-matrix analyze -n 4 -e "0-1, 2-3"
//! graph-matrix args 3 '0->1' '1->2' -1 --format json
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use graph_matrix_cli::commands;
use graph_matrix_cli::parse::SENTINEL;
use graph_matrix_cli::{CliResult, Format, OutputArgs, Settings};
use tracing_subscriber::EnvFilter;

/// Shortest paths, connectivity, diameter and components of a small graph
#[derive(Parser)]
#[command(name = "graph-matrix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all logging except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for the vertex count and the edge list (default)
    Interactive,

    /// Analyze an edge list passed as a flag
    Analyze {
        /// Number of vertices
        #[arg(short = 'n', long)]
        vertices: String,

        /// Comma-separated edges, e.g. "0-1, 1->2"
        #[arg(short, long, default_value = "")]
        edges: String,
    },

    /// Vertex count followed by edge arguments, terminated by -1
    Args {
        /// Number of vertices
        vertices: String,

        /// Edges such as 0-1 or 1->2, ending with -1
        #[arg(value_terminator = SENTINEL, allow_hyphen_values = true)]
        edges: Vec<String>,
    },

    /// Print one shortest route between two vertices
    Path {
        /// Number of vertices
        #[arg(short = 'n', long)]
        vertices: String,

        /// Comma-separated edges, e.g. "0-1, 1->2"
        #[arg(short, long, default_value = "")]
        edges: String,

        /// Start vertex
        #[arg(long)]
        from: String,

        /// End vertex
        #[arg(long)]
        to: String,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands, settings: &Settings) -> CliResult<()> {
    let mut out = io::stdout().lock();

    match command {
        Commands::Interactive => {
            // Keep JSON on stdout parseable
            let mut prompt: Box<dyn Write> = match settings.format {
                Format::Text => Box::new(io::stdout()),
                Format::Json => Box::new(io::stderr()),
            };
            commands::run_interactive(io::stdin().lock(), &mut prompt, &mut out, settings)
        }
        Commands::Analyze { vertices, edges } => {
            commands::run_analyze(&mut out, &vertices, &edges, settings)
        }
        Commands::Args { vertices, edges } => {
            commands::run_argument_list(&mut out, &vertices, &edges, settings)
        }
        Commands::Path {
            vertices,
            edges,
            from,
            to,
        } => commands::run_path(&mut out, &vertices, &edges, &from, &to, settings),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let settings = Settings::from(cli.output);
    let command = cli.command.unwrap_or(Commands::Interactive);

    match run(command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("  {} {}", "Error:".red().bold(), e);
            eprintln!();
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("graph-matrix").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_args_stop_at_terminator() {
        let cli = parse(&["args", "3", "0->1", "1->2", "-1", "--format", "json"]);
        let Some(Commands::Args { vertices, edges }) = cli.command else {
            panic!("expected the args command");
        };
        assert_eq!(vertices, "3");
        assert_eq!(edges, vec!["0->1", "1->2"]);
        assert_eq!(Settings::from(cli.output).format, Format::Json);
    }

    #[test]
    fn test_args_flags_before_edges() {
        let cli = parse(&["--format", "json", "args", "2", "0-1", "-1", "--degrees"]);
        let Some(Commands::Args { edges, .. }) = cli.command else {
            panic!("expected the args command");
        };
        assert_eq!(edges, vec!["0-1"]);
        let settings = Settings::from(cli.output);
        assert_eq!(settings.format, Format::Json);
        assert!(settings.show_degrees);
    }

    #[test]
    fn test_args_only_terminator() {
        let cli = parse(&["args", "4", "-1"]);
        let Some(Commands::Args { edges, .. }) = cli.command else {
            panic!("expected the args command");
        };
        assert!(edges.is_empty());
    }

    #[test]
    fn test_args_without_terminator() {
        let cli = parse(&["args", "3", "0-1", "1->2"]);
        let Some(Commands::Args { edges, .. }) = cli.command else {
            panic!("expected the args command");
        };
        assert_eq!(edges, vec!["0-1", "1->2"]);
    }

    #[test]
    fn test_args_rejects_stray_tokens_after_terminator() {
        let result = Cli::try_parse_from(["graph-matrix", "args", "3", "0-1", "-1", "2-3"]);
        assert!(result.is_err());
    }
}
