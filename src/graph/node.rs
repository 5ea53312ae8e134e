// src/graph/node.rs

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Integer node identifier as it appears in the input files.
pub type NodeId = u32;

/// One unit of computation.
///
/// Placeholder nodes (referenced by an edge but missing from the schedule
/// report) have every optional field set to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub operation_type: Option<u32>,
    pub scheduled_time: Option<i64>,
    pub end_time: Option<i64>,
    /// Direct successors in the order the edges were read.
    pub successors: Vec<NodeId>,
}

impl Node {
    /// A scheduled node with no successors yet.
    pub fn scheduled(operation_type: u32, scheduled_time: i64, end_time: i64) -> Self {
        Self {
            operation_type: Some(operation_type),
            scheduled_time: Some(scheduled_time),
            end_time: Some(end_time),
            successors: Vec::new(),
        }
    }

    /// A node known only from the dependency description.
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn duration(&self) -> Option<i64> {
        Some(self.end_time? - self.scheduled_time?)
    }

    pub fn is_placeholder(&self) -> bool {
        self.scheduled_time.is_none()
    }
}

/// Mapping from node id to node.
///
/// Every id in any successor list is also a key. Nodes are only ever added
/// or given extra successors; nothing is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleGraph {
    nodes: BTreeMap<NodeId, Node>,
}

impl ScheduleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a scheduled node, keeping any successors already
    /// attached to that id.
    pub fn insert(&mut self, id: NodeId, node: Node) {
        match self.nodes.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(node);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                let mut successors = std::mem::take(&mut existing.successors);
                successors.extend(node.successors.iter().copied());
                *existing = Node { successors, ..node };
            }
        }
    }

    /// Record the edge `from -> to`.
    ///
    /// The edge is only stored when `from` is already known; `to` is created
    /// as a placeholder when missing. Returns whether the edge was stored.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        let stored = match self.nodes.get_mut(&from) {
            Some(node) => {
                node.successors.push(to);
                true
            }
            None => false,
        };
        self.nodes.entry(to).or_insert_with(Node::placeholder);
        stored
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.successors.len()).sum()
    }

    /// Scheduled nodes ordered by start time, ties broken by id.
    pub fn by_start_time(&self) -> Vec<(NodeId, &Node)> {
        let mut scheduled: Vec<(NodeId, &Node)> = self
            .iter()
            .filter(|(_, node)| node.scheduled_time.is_some())
            .collect();
        scheduled.sort_by_key(|(id, node)| (node.scheduled_time, *id));
        scheduled
    }

    /// Earliest start and latest end over scheduled nodes.
    pub fn time_span(&self) -> Option<(i64, i64)> {
        let start = self.nodes.values().filter_map(|n| n.scheduled_time).min()?;
        let end = self.nodes.values().filter_map(|n| n.end_time).max()?;
        Some((start, end.max(start)))
    }
}
