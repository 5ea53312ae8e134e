// src/parse/schedule.rs

use std::path::Path;

use regex::Regex;
use tracing::{debug, trace};

use crate::errors::Result;
use crate::graph::{Node, NodeId, ScheduleGraph};

const SCHEDULE_LINE: &str =
    r"Node (\d+) \(Operation Type: (\d+)\) -> Scheduled at Time (\d+), Ends at Time (\d+)";

/// Line matcher for the scheduled-operations report.
#[derive(Debug, Clone)]
pub struct ScheduleParser {
    line_re: Regex,
}

impl ScheduleParser {
    pub fn new() -> Result<Self> {
        let line_re = Regex::new(SCHEDULE_LINE).map_err(anyhow::Error::from)?;
        Ok(Self { line_re })
    }

    /// Parse one report line, or `None` when it does not carry a node.
    pub fn parse_line(&self, line: &str) -> Option<(NodeId, Node)> {
        let caps = self.line_re.captures(line)?;
        let id = caps[1].parse().ok()?;
        let operation_type = caps[2].parse().ok()?;
        let scheduled_time = caps[3].parse().ok()?;
        let end_time = caps[4].parse().ok()?;
        Some((id, Node::scheduled(operation_type, scheduled_time, end_time)))
    }

    /// Build the node mapping from a whole report.
    ///
    /// Lines that do not match are skipped; a repeated id keeps the last line.
    pub fn parse(&self, text: &str) -> ScheduleGraph {
        let mut graph = ScheduleGraph::new();
        for (idx, line) in text.lines().enumerate() {
            match self.parse_line(line) {
                Some((id, node)) => graph.insert(id, node),
                None => trace!(line = idx + 1, "skipping non-schedule line"),
            }
        }
        graph
    }
}

/// Read and parse the scheduled-operations report at `path`.
pub fn read_schedule(path: impl AsRef<Path>) -> Result<ScheduleGraph> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let graph = ScheduleParser::new()?.parse(&contents);
    debug!(?path, nodes = graph.len(), "read schedule report");
    Ok(graph)
}
