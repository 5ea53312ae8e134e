// src/parse/dot.rs

//! Reader for the Graphviz description of the dependency graph.
//!
//! Only two statement shapes are understood:
//!
//! ```text
//! 3 [ label = "2"]     node 3 has operation type 2
//! 1 -> 3               edge from 1 to 3
//! ```
//!
//! Everything else (`digraph G {`, attributes, closing braces) is ignored.

use std::collections::BTreeMap;

use regex::Regex;
use tracing::trace;

use crate::errors::Result;
use crate::graph::NodeId;
use crate::parse::dependencies::DependencySpec;

const NODE_STMT: &str = r#"^\s*(\d+)\s*\[\s*label\s*=\s*"(\d+)"\s*\]"#;
const EDGE_STMT: &str = r"^\s*(\d+)\s*->\s*(\d+)";

/// Parse a DOT graph into the same shape the count/edge reader produces.
///
/// The node count is one more than the largest labelled node id.
pub fn parse_dot(text: &str) -> Result<DependencySpec> {
    let node_re = Regex::new(NODE_STMT).map_err(anyhow::Error::from)?;
    let edge_re = Regex::new(EDGE_STMT).map_err(anyhow::Error::from)?;

    let mut operation_types: BTreeMap<NodeId, u32> = BTreeMap::new();
    let mut edges: Vec<(NodeId, NodeId)> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if let Some(caps) = node_re.captures(line) {
            if let (Ok(id), Ok(op)) = (caps[1].parse(), caps[2].parse()) {
                operation_types.insert(id, op);
                continue;
            }
        } else if let Some(caps) = edge_re.captures(line) {
            if let (Ok(from), Ok(to)) = (caps[1].parse(), caps[2].parse()) {
                edges.push((from, to));
                continue;
            }
        }
        trace!(line = idx + 1, "skipping DOT statement");
    }

    let node_count = operation_types
        .last_key_value()
        .map_or(0, |(id, _)| (*id as usize).saturating_add(1));

    Ok(DependencySpec {
        node_count,
        operation_types,
        edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_labels_and_edges() {
        let spec = parse_dot(
            r#"digraph G {
  0 [ label = "1"];
  2 [ label = "2"];
  0 -> 2;
  1 -> 2
}"#,
        )
        .unwrap();

        assert_eq!(spec.node_count, 3);
        assert_eq!(spec.operation_types, BTreeMap::from([(0, 1), (2, 2)]));
        assert_eq!(spec.edges, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn largest_node_id_does_not_size_anything() {
        let spec = parse_dot("4294967295 [ label = \"1\"];\n0 -> 4294967295\n").unwrap();
        assert_eq!(spec.node_count, 4_294_967_296);
        assert_eq!(spec.operation_types, BTreeMap::from([(u32::MAX, 1)]));
        assert_eq!(spec.edges, vec![(0, u32::MAX)]);
    }

    #[test]
    fn graph_without_labels_has_no_declared_nodes() {
        let spec = parse_dot("digraph {\n 4 -> 5\n}\n").unwrap();
        assert_eq!(spec.node_count, 0);
        assert_eq!(spec.edges, vec![(4, 5)]);
    }
}
