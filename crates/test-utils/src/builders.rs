#![allow(dead_code)]

use std::collections::BTreeMap;
use schedviz::config::{
    ConfigFile, InputSection, LayoutSection, RawConfigFile, RawOperationStyle,
};
use schedviz::graph::{Node, NodeId, ScheduleGraph};

/// Builder for `ScheduleGraph` to simplify test setup.
pub struct GraphBuilder {
    graph: ScheduleGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: ScheduleGraph::new(),
        }
    }

    /// Add a scheduled node.
    pub fn node(mut self, id: NodeId, operation_type: u32, start: i64, end: i64) -> Self {
        self.graph
            .insert(id, Node::scheduled(operation_type, start, end));
        self
    }

    /// Add unit-length type-1 nodes for every id, all starting at 0.
    pub fn nodes(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        for id in ids {
            self.graph.insert(id, Node::scheduled(1, 0, 1));
        }
        self
    }

    pub fn edge(mut self, from: NodeId, to: NodeId) -> Self {
        self.graph.add_edge(from, to);
        self
    }

    pub fn edges(mut self, edges: &[(NodeId, NodeId)]) -> Self {
        for (from, to) in edges {
            self.graph.add_edge(*from, *to);
        }
        self
    }

    pub fn build(self) -> ScheduleGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a schedule report in the scheduler's own line format.
pub fn schedule_report(nodes: &[(NodeId, u32, i64, i64)]) -> String {
    let mut out = String::from("Scheduled Operations:\n");
    for (id, op, start, end) in nodes {
        out.push_str(&format!(
            "Node {id} (Operation Type: {op}) -> Scheduled at Time {start}, Ends at Time {end}\n"
        ));
    }
    out
}

/// Render a count/edge dependency file, with a trailing resource table.
pub fn dependency_file(operation_types: &[u32], edges: &[(NodeId, NodeId)]) -> String {
    let mut out = format!("{}\n", operation_types.len());
    for op in operation_types {
        out.push_str(&format!("{op}\n"));
    }
    out.push_str(&format!("{}\n", edges.len()));
    for (from, to) in edges {
        out.push_str(&format!("{from} {to}\n"));
    }
    out.push_str("3\n1 1\n2 2\n2 2\n");
    out
}

/// Builder for `ConfigFile`.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                input: InputSection::default(),
                layout: LayoutSection::default(),
                operation: BTreeMap::new(),
            },
        }
    }

    pub fn schedule(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.config.input.schedule = path.into();
        self
    }

    pub fn dependencies(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.config.input.dependencies = path.into();
        self
    }

    pub fn spacing(mut self, spacing: u32) -> Self {
        self.config.layout.spacing = spacing;
        self
    }

    pub fn operation(mut self, op: u32, label: &str, color: &str) -> Self {
        self.config.operation.insert(
            op.to_string(),
            RawOperationStyle {
                label: label.to_string(),
                color: color.to_string(),
            },
        );
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
