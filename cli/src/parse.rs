//! Text input parsing: vertex counts, `a-b` / `a->b` edge lists and the
//! `-1`-terminated argument list.

use graph_matrix_core::{EdgeSpec, VertexId, MAX_VERTICES};

use crate::error::{CliError, CliResult};

/// Terminator for the argument-list input mode.
pub const SENTINEL: &str = "-1";

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn parse_number(text: &str) -> CliResult<usize> {
    text.parse::<usize>()
        .map_err(|_| CliError::NotANumber(text.to_string()))
}

/// Parse a non-negative vertex count no larger than [`MAX_VERTICES`].
pub fn parse_vertex_count(text: &str) -> CliResult<usize> {
    let given = parse_number(text.trim())?;
    if given > MAX_VERTICES {
        return Err(CliError::TooManyVertices { given, max: MAX_VERTICES });
    }
    Ok(given)
}

/// Parse a single vertex identifier, e.g. a path endpoint.
pub fn parse_vertex(text: &str) -> CliResult<VertexId> {
    parse_number(text.trim())
}

/// Parse one edge token. `->` marks a directed edge, a lone `-` an
/// undirected one. Whitespace inside the token is ignored.
pub fn parse_edge(token: &str) -> CliResult<EdgeSpec> {
    let token = strip_whitespace(token);

    let (source, target, directed) = if let Some((lhs, rhs)) = token.split_once("->") {
        (lhs, rhs, true)
    } else if let Some((lhs, rhs)) = token.split_once('-') {
        (lhs, rhs, false)
    } else {
        return Err(CliError::MalformedEdge(token));
    };

    Ok(EdgeSpec {
        source: parse_number(source)?,
        target: parse_number(target)?,
        directed,
    })
}

/// Parse a comma-separated edge list such as `0-1, 1->2`.
///
/// Empty entries (blank input, trailing or doubled commas) are skipped.
pub fn parse_edge_list(text: &str) -> CliResult<Vec<EdgeSpec>> {
    strip_whitespace(text)
        .split(',')
        .filter(|token| !token.is_empty())
        .map(parse_edge)
        .collect()
}

/// Parse edge arguments up to the `-1` terminator.
///
/// Each argument may itself hold a comma-separated list. Anything after the
/// terminator is ignored; a missing terminator ends the list at the last
/// argument.
pub fn parse_argument_list<S: AsRef<str>>(tokens: &[S]) -> CliResult<Vec<EdgeSpec>> {
    let mut edges = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if token.trim() == SENTINEL {
            let ignored = tokens.len() - i - 1;
            if ignored > 0 {
                tracing::warn!(ignored, "ignoring arguments after {} terminator", SENTINEL);
            }
            return Ok(edges);
        }
        edges.extend(parse_edge_list(token)?);
    }

    tracing::debug!(edges = edges.len(), "argument list ended without {} terminator", SENTINEL);
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count() {
        assert_eq!(parse_vertex_count("4").unwrap(), 4);
        assert_eq!(parse_vertex_count("  12\n").unwrap(), 12);
        assert_eq!(parse_vertex_count("0").unwrap(), 0);
    }

    #[test]
    fn test_vertex_count_rejects_text_and_negatives() {
        assert!(matches!(parse_vertex_count("four"), Err(CliError::NotANumber(s)) if s == "four"));
        assert!(matches!(parse_vertex_count("-3"), Err(CliError::NotANumber(_))));
        assert!(matches!(parse_vertex_count(""), Err(CliError::NotANumber(_))));
    }

    #[test]
    fn test_vertex_count_limit() {
        assert_eq!(parse_vertex_count(&MAX_VERTICES.to_string()).unwrap(), MAX_VERTICES);

        let err = parse_vertex_count("5000000000").unwrap_err();
        assert!(matches!(err, CliError::TooManyVertices { given: 5_000_000_000, max: MAX_VERTICES }));
        assert_eq!(err.to_string(), format!("Can not analyze 5000000000 vertices; the limit is {MAX_VERTICES}."));
    }

    #[test]
    fn test_undirected_edge() {
        assert_eq!(parse_edge("0-1").unwrap(), EdgeSpec::undirected(0, 1));
    }

    #[test]
    fn test_directed_edge() {
        assert_eq!(parse_edge("2->10").unwrap(), EdgeSpec::directed(2, 10));
    }

    #[test]
    fn test_edge_whitespace_insensitive() {
        assert_eq!(parse_edge(" 3 - > 4 ").unwrap(), EdgeSpec::directed(3, 4));
        assert_eq!(parse_edge("\t5 -6").unwrap(), EdgeSpec::undirected(5, 6));
    }

    #[test]
    fn test_malformed_edge() {
        let err = parse_edge("0>1").unwrap_err();
        assert!(matches!(&err, CliError::MalformedEdge(t) if t == "0>1"));
        assert_eq!(err.to_string(), "'0>1' is not a valid edge. Use '-' or '->'");
    }

    #[test]
    fn test_edge_not_a_number() {
        assert!(matches!(parse_edge("a-1"), Err(CliError::NotANumber(s)) if s == "a"));
        assert!(matches!(parse_edge("1->"), Err(CliError::NotANumber(s)) if s.is_empty()));
        assert!(matches!(parse_edge("1--2"), Err(CliError::NotANumber(s)) if s == "-2"));
    }

    #[test]
    fn test_edge_list() {
        let edges = parse_edge_list("0-1, 1->2 ,2 - 0").unwrap();
        assert_eq!(
            edges,
            vec![EdgeSpec::undirected(0, 1), EdgeSpec::directed(1, 2), EdgeSpec::undirected(2, 0)]
        );
    }

    #[test]
    fn test_edge_list_empty_entries() {
        assert!(parse_edge_list("").unwrap().is_empty());
        assert!(parse_edge_list("   \n").unwrap().is_empty());
        assert_eq!(parse_edge_list("0-1,,1-2,").unwrap().len(), 2);
    }

    #[test]
    fn test_edge_list_stops_at_first_error() {
        assert!(matches!(parse_edge_list("0-1, 12, 1-2"), Err(CliError::MalformedEdge(t)) if t == "12"));
    }

    #[test]
    fn test_argument_list_with_sentinel() {
        let edges = parse_argument_list(&["0-1", "1->2", "-1"]).unwrap();
        assert_eq!(edges, vec![EdgeSpec::undirected(0, 1), EdgeSpec::directed(1, 2)]);
    }

    #[test]
    fn test_argument_list_ignores_after_sentinel() {
        let edges = parse_argument_list(&["0-1", "-1", "garbage", "2-3"]).unwrap();
        assert_eq!(edges, vec![EdgeSpec::undirected(0, 1)]);
    }

    #[test]
    fn test_argument_list_without_sentinel() {
        let edges = parse_argument_list(&["0-1,1-2", "2->0"]).unwrap();
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn test_argument_list_only_sentinel() {
        assert!(parse_argument_list(&["-1"]).unwrap().is_empty());
        assert!(parse_argument_list::<&str>(&[]).unwrap().is_empty());
    }
}
