use clap::builder::NonEmptyStringValueParser;
use clap::{Args, ValueEnum};

/// Output format for analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Fixed-width text tables
    #[default]
    Text,
    /// A single pretty-printed JSON object
    Json,
}

/// Rendering settings. Each one can also be supplied through the
/// environment; command-line flags win.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text, env = "GRAPH_MATRIX_FORMAT")]
    pub format: Format,

    /// Marker printed for unreachable pairs in the distance matrix
    #[arg(
        long,
        global = true,
        default_value = "-",
        env = "GRAPH_MATRIX_UNREACHABLE",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub unreachable: String,

    /// Fixed column width for matrices (default: widest cell)
    #[arg(
        long,
        global = true,
        env = "GRAPH_MATRIX_WIDTH",
        value_parser = clap::value_parser!(u8).range(1..=16)
    )]
    pub width: Option<u8>,

    /// Skip the adjacency matrix in text output
    #[arg(long, global = true, env = "GRAPH_MATRIX_NO_ADJACENCY")]
    pub no_adjacency: bool,

    /// Include per-vertex degrees
    #[arg(long, global = true, env = "GRAPH_MATRIX_DEGREES")]
    pub degrees: bool,
}

/// Resolved settings handed to the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: Format,
    pub unreachable: String,
    pub width: Option<usize>,
    pub show_adjacency: bool,
    pub show_degrees: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: Format::Text,
            unreachable: "-".to_string(),
            width: None,
            show_adjacency: true,
            show_degrees: false,
        }
    }
}

impl From<OutputArgs> for Settings {
    fn from(args: OutputArgs) -> Self {
        Self {
            format: args.format,
            unreachable: args.unreachable,
            width: args.width.map(usize::from),
            show_adjacency: !args.no_adjacency,
            show_degrees: args.degrees,
        }
    }
}
