// src/parse/dependencies.rs

//! Reader for the node/edge-count dependency file.
//!
//! ```text
//! 4          <- node count N
//! 1          <- N lines of declared operation types
//! 2
//! 1
//! 2
//! 3          <- edge count E (line N + 2)
//! 0 2        <- E lines of "from to"
//! 1 2
//! 2 3
//! 3          <- anything after the edges is ignored
//! 1 1
//! ```

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::errors::{Result, SchedvizError};
use crate::graph::{NodeId, ScheduleGraph};

/// Parsed dependency description, independent of the schedule report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySpec {
    /// Node count declared on the first line.
    pub node_count: usize,
    /// Declared operation type by node index; unreadable entries are left out.
    pub operation_types: BTreeMap<NodeId, u32>,
    /// Edges in file order.
    pub edges: Vec<(NodeId, NodeId)>,
}

/// Parse the count/edge layout.
///
/// The layout is positional: the edge count must sit on line `N + 2`, and
/// exactly `E` edge lines must follow it.
pub fn parse_dependencies(text: &str) -> Result<DependencySpec> {
    let lines: Vec<&str> = text.lines().collect();

    let node_count: usize = parse_count(&lines, 0, "node count")?;

    // Counts are checked against the file length before anything is sized by them.
    let edge_line = node_count
        .checked_add(1)
        .filter(|idx| *idx < lines.len())
        .ok_or_else(|| SchedvizError::DependencyFormat {
            line: node_count.saturating_add(2),
            reason: format!("missing edge count after {node_count} declared nodes"),
        })?;

    let operation_types = lines
        .iter()
        .skip(1)
        .take(node_count)
        .zip(0..)
        .filter_map(|(l, id)| l.trim().parse().ok().map(|op| (id, op)))
        .collect();

    let edge_count: usize = parse_count(&lines, edge_line, "edge count")?;

    let mut edges = Vec::new();
    for idx in (edge_line + 1..lines.len()).take(edge_count) {
        edges.push(parse_edge(&lines, idx)?);
    }
    if edges.len() < edge_count {
        return Err(SchedvizError::DependencyFormat {
            line: lines.len() + 1,
            reason: format!(
                "missing edge line: {edge_count} edges declared, {} present",
                edges.len()
            ),
        });
    }

    Ok(DependencySpec {
        node_count,
        operation_types,
        edges,
    })
}

fn parse_count(lines: &[&str], idx: usize, what: &str) -> Result<usize> {
    let line = lines.get(idx).ok_or_else(|| SchedvizError::DependencyFormat {
        line: idx + 1,
        reason: format!("missing {what}"),
    })?;
    line.trim()
        .parse()
        .map_err(|_| SchedvizError::DependencyFormat {
            line: idx + 1,
            reason: format!("expected {what}, found '{}'", line.trim()),
        })
}

fn parse_edge(lines: &[&str], idx: usize) -> Result<(NodeId, NodeId)> {
    let malformed = |reason: String| SchedvizError::DependencyFormat {
        line: idx + 1,
        reason,
    };

    let line = lines
        .get(idx)
        .ok_or_else(|| malformed("missing edge line".to_string()))?;

    let ids = line
        .split_whitespace()
        .map(|tok| tok.parse::<NodeId>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| malformed(format!("expected two node ids, found '{}'", line.trim())))?;

    match ids.as_slice() {
        [from, to] => Ok((*from, *to)),
        _ => Err(malformed(format!(
            "expected two node ids, found '{}'",
            line.trim()
        ))),
    }
}

/// Attach every edge of `spec` to `graph`.
///
/// Targets missing from the schedule become placeholders; edges whose source
/// is missing are dropped.
pub fn attach_dependencies(graph: &mut ScheduleGraph, spec: &DependencySpec) {
    let mut dropped = 0usize;
    for (from, to) in &spec.edges {
        if !graph.add_edge(*from, *to) {
            warn!(from, to, "edge source is not in the schedule; dropping edge");
            dropped += 1;
        }
    }
    debug!(
        declared_nodes = spec.node_count,
        edges = spec.edges.len(),
        dropped,
        nodes = graph.len(),
        "attached dependencies"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;

    const SAMPLE: &str = "3\n1\n2\n1\n2\n0 2\n1 2\n3\n1 1\n2 2\n2 2\n";

    #[test]
    fn parses_counts_types_and_edges() {
        let spec = parse_dependencies(SAMPLE).unwrap();
        assert_eq!(spec.node_count, 3);
        assert_eq!(
            spec.operation_types,
            BTreeMap::from([(0, 1), (1, 2), (2, 1)])
        );
        assert_eq!(spec.edges, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn tolerates_padding_around_numbers() {
        let spec = parse_dependencies(" 1 \n 2\n 1 \n 4   5 \n").unwrap();
        assert_eq!(spec.edges, vec![(4, 5)]);
    }

    #[test]
    fn missing_edge_count_reports_line() {
        let err = parse_dependencies("2\n1\n").unwrap_err();
        match err {
            SchedvizError::DependencyFormat { line, reason } => {
                assert_eq!(line, 4);
                assert!(reason.contains("edge count"));
            }
            other => panic!("expected DependencyFormat, got {other:?}"),
        }
    }

    #[test]
    fn too_few_edge_lines_is_an_error() {
        let err = parse_dependencies("0\n2\n0 1\n").unwrap_err();
        assert!(matches!(err, SchedvizError::DependencyFormat { line: 4, .. }));
    }

    #[test]
    fn node_count_past_end_of_file_is_an_error() {
        let err = parse_dependencies("18446744073709551615\n").unwrap_err();
        match err {
            SchedvizError::DependencyFormat { reason, .. } => {
                assert!(reason.contains("edge count"));
            }
            other => panic!("expected DependencyFormat, got {other:?}"),
        }
    }

    #[test]
    fn edge_count_past_end_of_file_is_an_error() {
        let err = parse_dependencies("0\n9223372036854775807\n0 1\n").unwrap_err();
        match err {
            SchedvizError::DependencyFormat { line, reason } => {
                assert_eq!(line, 4);
                assert!(reason.contains("1 present"));
            }
            other => panic!("expected DependencyFormat, got {other:?}"),
        }
    }

    #[test]
    fn edge_with_three_ids_is_an_error() {
        let err = parse_dependencies("0\n1\n0 1 2\n").unwrap_err();
        assert!(matches!(err, SchedvizError::DependencyFormat { line: 3, .. }));
    }

    #[test]
    fn non_numeric_node_count_is_an_error() {
        let err = parse_dependencies("three\n").unwrap_err();
        assert!(matches!(err, SchedvizError::DependencyFormat { line: 1, .. }));
    }

    #[test]
    fn attaching_creates_placeholders_and_drops_unknown_sources() {
        let mut graph = ScheduleGraph::new();
        graph.insert(0, Node::scheduled(1, 0, 1));
        let spec = DependencySpec {
            node_count: 3,
            operation_types: BTreeMap::new(),
            edges: vec![(0, 2), (1, 2)],
        };

        attach_dependencies(&mut graph, &spec);

        assert_eq!(graph.get(0).unwrap().successors, vec![2]);
        assert!(graph.get(2).unwrap().is_placeholder());
        assert!(!graph.contains(1));
    }
}
