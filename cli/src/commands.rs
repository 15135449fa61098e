//! Command runners. Each reads its input, builds the graph once and hands
//! the analysis to the renderer selected by [`Settings`].

use std::io::{BufRead, Write};

use graph_matrix_core::{analyze, shortest_route, EdgeSpec, Graph};

use crate::error::{CliError, CliResult};
use crate::parse::{parse_argument_list, parse_edge_list, parse_vertex, parse_vertex_count};
use crate::render;
use crate::settings::{Format, Settings};

const VERTEX_PROMPT: &str = "Enter the number of vertices in your graph\n\nVERTICES: ";

const GRAPH_PROMPT: &str = "Enter your graph\n  \
                            Undirected Example: 0-1, 2-0\n  \
                            Directed Example: 0->1, 1->2, 2->0\n\nGRAPH: ";

fn read_answer<R: BufRead>(input: &mut R, what: &'static str) -> CliResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::UnexpectedEof(what));
    }
    Ok(line)
}

/// Build, analyze and render a graph.
pub fn report<W: Write>(
    out: &mut W,
    vertex_count: usize,
    edges: &[EdgeSpec],
    settings: &Settings,
) -> CliResult<()> {
    let graph = Graph::build(vertex_count, edges.iter().copied())?;
    let analysis = analyze(&graph);
    tracing::info!(
        vertex_count,
        edges = edges.len(),
        connected = analysis.connected,
        "analysis complete"
    );

    match settings.format {
        Format::Text => render::render_text(out, &graph, &analysis, settings),
        Format::Json => render::render_json(out, &graph, edges, &analysis, settings),
    }
}

/// Prompt for a vertex count and an edge list, one line each.
///
/// Prompts go to `prompt` and results to `out`, which may be the same stream.
pub fn run_interactive<R, P, W>(
    mut input: R,
    prompt: &mut P,
    out: &mut W,
    settings: &Settings,
) -> CliResult<()>
where
    R: BufRead,
    P: Write + ?Sized,
    W: Write,
{
    writeln!(prompt)?;
    write!(prompt, "{VERTEX_PROMPT}")?;
    prompt.flush()?;
    let vertex_count = parse_vertex_count(&read_answer(&mut input, "the number of vertices")?)?;

    writeln!(prompt)?;
    write!(prompt, "{GRAPH_PROMPT}")?;
    prompt.flush()?;
    let edges = parse_edge_list(&read_answer(&mut input, "the graph")?)?;

    report(out, vertex_count, &edges, settings)
}

/// Vertex count and edge list given as flag values.
pub fn run_analyze<W: Write>(
    out: &mut W,
    vertices: &str,
    edges: &str,
    settings: &Settings,
) -> CliResult<()> {
    let vertex_count = parse_vertex_count(vertices)?;
    let edges = parse_edge_list(edges)?;
    report(out, vertex_count, &edges, settings)
}

/// Vertex count followed by edge arguments, terminated by `-1`.
pub fn run_argument_list<W: Write, S: AsRef<str>>(
    out: &mut W,
    vertices: &str,
    tokens: &[S],
    settings: &Settings,
) -> CliResult<()> {
    let vertex_count = parse_vertex_count(vertices)?;
    let edges = parse_argument_list(tokens)?;
    report(out, vertex_count, &edges, settings)
}

/// Print one shortest route between two vertices.
pub fn run_path<W: Write>(
    out: &mut W,
    vertices: &str,
    edges: &str,
    from: &str,
    to: &str,
    settings: &Settings,
) -> CliResult<()> {
    let vertex_count = parse_vertex_count(vertices)?;
    let graph = Graph::build(vertex_count, parse_edge_list(edges)?)?;

    let from = parse_vertex(from)?;
    let to = parse_vertex(to)?;
    if let Some(&vertex) = [from, to].iter().find(|&&v| v >= vertex_count) {
        return Err(CliError::UnknownVertex { vertex, vertex_count });
    }

    let route = shortest_route(&graph, from, to);
    tracing::debug!(from, to, found = route.is_some(), "route search complete");
    render::render_route(out, from, to, route.as_deref(), settings)
}
