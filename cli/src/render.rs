//! Output rendering: fixed-width text tables and the JSON report.

use std::io::Write;

use graph_matrix_core::{isolated_vertices, Analysis, EdgeSpec, Graph, Partition, VertexId};
use serde::Serialize;

use crate::error::CliResult;
use crate::settings::{Format, Settings};

/// Degree row as it appears in the JSON report.
#[derive(Debug, Serialize)]
struct DegreeRow {
    vertex: VertexId,
    out_degree: u32,
    in_degree: u32,
    total_degree: u32,
}

/// JSON shape of a full analysis. Unreachable distances serialize as null.
#[derive(Debug, Serialize)]
struct Report<'a> {
    vertex_count: usize,
    edges: Vec<String>,
    adjacency: Vec<Vec<u8>>,
    distances: Vec<Vec<Option<usize>>>,
    connected: bool,
    diameter: Option<usize>,
    components: Option<&'a Partition>,
    isolated: Option<Vec<VertexId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    degrees: Option<Vec<DegreeRow>>,
}

#[derive(Debug, Serialize)]
struct RouteReport<'a> {
    from: VertexId,
    to: VertexId,
    route: Option<&'a [VertexId]>,
    distance: Option<usize>,
}

fn label_width(vertex_count: usize) -> usize {
    vertex_count.saturating_sub(1).to_string().len()
}

/// Square table with vertex indices along both axes.
fn write_table<W: Write>(
    out: &mut W,
    title: &str,
    cells: &[Vec<String>],
    fixed_width: Option<usize>,
) -> std::io::Result<()> {
    let n = cells.len();
    let w = fixed_width.unwrap_or_else(|| {
        cells
            .iter()
            .flatten()
            .map(String::len)
            .chain(std::iter::once(label_width(n)))
            .max()
            .unwrap_or(1)
    });

    writeln!(out)?;
    writeln!(out, "{title}:")?;
    if n == 0 {
        writeln!(out, "  (empty)")?;
        return Ok(());
    }

    write!(out, "  {:>w$}  ", "")?;
    for col in 0..n {
        write!(out, " {col:>w$}")?;
    }
    writeln!(out)?;

    for (row, values) in cells.iter().enumerate() {
        write!(out, "  {row:>w$} |")?;
        for value in values {
            write!(out, " {value:>w$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn format_set(members: &[VertexId]) -> String {
    let inner: Vec<String> = members.iter().map(ToString::to_string).collect();
    format!("{{{}}}", inner.join(", "))
}

/// Render the text report: matrices, connectivity verdict, then either the
/// diameter or the components.
pub fn render_text<W: Write>(
    out: &mut W,
    graph: &Graph,
    analysis: &Analysis,
    settings: &Settings,
) -> CliResult<()> {
    if settings.show_adjacency {
        let adjacency: Vec<Vec<String>> = graph
            .rows()
            .map(|row| row.iter().map(|&c| u8::from(c).to_string()).collect())
            .collect();
        write_table(out, "Adjacency Matrix", &adjacency, settings.width)?;
    }

    let distances: Vec<Vec<String>> = analysis
        .distances
        .rows()
        .map(|row| {
            row.iter()
                .map(|d| match d {
                    Some(d) => d.to_string(),
                    None => settings.unreachable.clone(),
                })
                .collect()
        })
        .collect();
    write_table(out, "Distance Matrix", &distances, settings.width)?;

    writeln!(out)?;
    writeln!(out, "Connected: {}", if analysis.connected { "yes" } else { "no" })?;

    if let Some(diameter) = analysis.diameter {
        writeln!(out, "Diameter: {diameter}")?;
    }

    if let Some(partition) = &analysis.components {
        writeln!(out, "Components:")?;
        if partition.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for component in partition {
            writeln!(out, "  {}", format_set(component))?;
        }

        let isolated = isolated_vertices(graph.vertex_count(), partition);
        if !isolated.is_empty() {
            writeln!(out, "Isolated: {}", format_set(&isolated))?;
        }
    }

    if settings.show_degrees {
        writeln!(out)?;
        writeln!(out, "Degrees:")?;
        writeln!(out, "{:>8} {:>5} {:>5} {:>7}", "vertex", "out", "in", "total")?;
        writeln!(out, "{:->8} {:->5} {:->5} {:->7}", "", "", "", "")?;
        for d in graph.degrees() {
            writeln!(
                out,
                "{:>8} {:>5} {:>5} {:>7}",
                d.vertex, d.out_degree, d.in_degree, d.total_degree
            )?;
        }
    }

    Ok(())
}

/// Render the analysis as one pretty-printed JSON object.
pub fn render_json<W: Write>(
    out: &mut W,
    graph: &Graph,
    edges: &[EdgeSpec],
    analysis: &Analysis,
    settings: &Settings,
) -> CliResult<()> {
    let report = Report {
        vertex_count: graph.vertex_count(),
        edges: edges.iter().map(ToString::to_string).collect(),
        adjacency: graph
            .rows()
            .map(|row| row.iter().map(|&c| u8::from(c)).collect())
            .collect(),
        distances: analysis.distances.rows().map(<[_]>::to_vec).collect(),
        connected: analysis.connected,
        diameter: analysis.diameter,
        components: analysis.components.as_ref(),
        isolated: analysis
            .components
            .as_ref()
            .map(|p| isolated_vertices(graph.vertex_count(), p)),
        degrees: settings.show_degrees.then(|| {
            graph
                .degrees()
                .into_iter()
                .map(|d| DegreeRow {
                    vertex: d.vertex,
                    out_degree: d.out_degree,
                    in_degree: d.in_degree,
                    total_degree: d.total_degree,
                })
                .collect()
        }),
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Render a shortest route between two vertices, or the lack of one.
pub fn render_route<W: Write>(
    out: &mut W,
    from: VertexId,
    to: VertexId,
    route: Option<&[VertexId]>,
    settings: &Settings,
) -> CliResult<()> {
    let distance = route.map(|r| r.len() - 1);

    match settings.format {
        Format::Json => {
            let report = RouteReport { from, to, route, distance };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        Format::Text => match (route, distance) {
            (Some(route), Some(hops)) => {
                let steps: Vec<String> = route.iter().map(ToString::to_string).collect();
                writeln!(out, "Path {from} -> {to}: {} ({hops} hops)", steps.join(" -> "))?;
            }
            _ => writeln!(out, "Path {from} -> {to}: no path")?,
        },
    }
    Ok(())
}
