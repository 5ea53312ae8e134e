// src/graph/layering.rs

//! Top-down layering of the dependency graph.
//!
//! The graph is augmented with two anchors: [`LayerNode::Source`] points at
//! every node without predecessors and every node without successors points
//! at [`LayerNode::Sink`]. A topological walk then gives every vertex a row
//! one below its deepest predecessor, with the source anchor on row 0.
//! Real nodes report `row - 1` as their level, so the top of the dependency
//! graph is level 0.

use std::collections::{BTreeMap, HashMap, HashSet};

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::errors::{Result, SchedvizError};
use crate::graph::node::{NodeId, ScheduleGraph};

/// Vertex of the augmented layout graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerNode {
    Source,
    Node(NodeId),
    Sink,
}

impl LayerNode {
    pub fn is_anchor(&self) -> bool {
        !matches!(self, LayerNode::Node(_))
    }

    pub fn label(&self) -> String {
        match self {
            LayerNode::Source => "S1".to_string(),
            LayerNode::Node(id) => id.to_string(),
            LayerNode::Sink => "S2".to_string(),
        }
    }
}

/// Result of layering: rows, positions and the augmented edge set.
#[derive(Debug, Clone)]
pub struct Layering {
    order: Vec<LayerNode>,
    rows: HashMap<LayerNode, usize>,
    positions: HashMap<LayerNode, (i64, i64)>,
    edges: Vec<(LayerNode, LayerNode)>,
}

/// Layer `graph` for a top-down drawing with `spacing` between neighbours.
///
/// Fails with [`SchedvizError::DagCycle`] when the successor relation has a
/// cycle (self-loops included).
pub fn layer_graph(graph: &ScheduleGraph, spacing: u32) -> Result<Layering> {
    let layout = augmented_graph(graph);

    let order = toposort(&layout, None).map_err(|cycle| {
        SchedvizError::DagCycle(format!(
            "cycle detected in dependency graph involving node {}",
            cycle.node_id().label()
        ))
    })?;

    let mut rows: HashMap<LayerNode, usize> = HashMap::with_capacity(order.len());
    for vertex in &order {
        let row = layout
            .neighbors_directed(*vertex, Direction::Incoming)
            .filter_map(|pred| rows.get(&pred))
            .max()
            .map_or(0, |deepest| deepest + 1);
        rows.insert(*vertex, row);
    }

    let positions = place_rows(&order, &rows, spacing);
    let edges = layout.all_edges().map(|(a, b, _)| (a, b)).collect();

    let layering = Layering {
        order,
        rows,
        positions,
        edges,
    };
    debug!(
        nodes = graph.len(),
        depth = layering.depth(),
        "layered dependency graph"
    );
    Ok(layering)
}

fn augmented_graph(graph: &ScheduleGraph) -> DiGraphMap<LayerNode, ()> {
    let mut layout: DiGraphMap<LayerNode, ()> = DiGraphMap::new();
    layout.add_node(LayerNode::Source);

    let mut has_predecessor: HashSet<NodeId> = HashSet::new();
    for (id, node) in graph.iter() {
        layout.add_node(LayerNode::Node(id));
        has_predecessor.extend(node.successors.iter().copied());
    }
    layout.add_node(LayerNode::Sink);

    for (id, node) in graph.iter() {
        for succ in &node.successors {
            layout.add_edge(LayerNode::Node(id), LayerNode::Node(*succ), ());
        }
    }

    for (id, node) in graph.iter() {
        if !has_predecessor.contains(&id) {
            layout.add_edge(LayerNode::Source, LayerNode::Node(id), ());
        }
        if node.successors.is_empty() {
            layout.add_edge(LayerNode::Node(id), LayerNode::Sink, ());
        }
    }

    layout
}

/// Spread each row around x = 0, keeping traversal order left to right.
fn place_rows(
    order: &[LayerNode],
    rows: &HashMap<LayerNode, usize>,
    spacing: u32,
) -> HashMap<LayerNode, (i64, i64)> {
    let mut by_row: BTreeMap<usize, Vec<LayerNode>> = BTreeMap::new();
    for vertex in order {
        by_row.entry(rows[vertex]).or_default().push(*vertex);
    }

    let spacing = i64::from(spacing);
    let mut positions = HashMap::with_capacity(order.len());
    for (row, members) in by_row {
        let width = members.len() as i64 * spacing;
        let start = (-width).div_euclid(2);
        for (i, vertex) in members.into_iter().enumerate() {
            positions.insert(vertex, (start + i as i64 * spacing, -(row as i64)));
        }
    }
    positions
}

impl Layering {
    /// Level of a real node: 0 for nodes without predecessors.
    pub fn level_of(&self, id: NodeId) -> Option<usize> {
        self.rows
            .get(&LayerNode::Node(id))
            .map(|row| row.saturating_sub(1))
    }

    /// Levels of all real nodes, keyed by id.
    pub fn levels(&self) -> BTreeMap<NodeId, usize> {
        self.order
            .iter()
            .filter_map(|vertex| match vertex {
                LayerNode::Node(id) => self.level_of(*id).map(|level| (*id, level)),
                _ => None,
            })
            .collect()
    }

    /// Row in the augmented graph; the source anchor is row 0.
    pub fn row_of(&self, vertex: LayerNode) -> Option<usize> {
        self.rows.get(&vertex).copied()
    }

    pub fn position_of(&self, vertex: LayerNode) -> Option<(i64, i64)> {
        self.positions.get(&vertex).copied()
    }

    /// Vertices in topological traversal order, anchors included.
    pub fn order(&self) -> &[LayerNode] {
        &self.order
    }

    /// Edges of the augmented graph, anchor edges included.
    pub fn edges(&self) -> &[(LayerNode, LayerNode)] {
        &self.edges
    }

    /// Vertices grouped by row, each row in traversal order.
    pub fn rows(&self) -> Vec<Vec<LayerNode>> {
        let mut grouped: Vec<Vec<LayerNode>> = vec![Vec::new(); self.depth() + 1];
        for vertex in &self.order {
            grouped[self.rows[vertex]].push(*vertex);
        }
        grouped
    }

    /// Index of the deepest row.
    pub fn depth(&self) -> usize {
        self.rows.values().copied().max().unwrap_or(0)
    }

    /// `(min_x, max_x, min_y, max_y)` over all positions.
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        let xs = self.positions.values().map(|(x, _)| *x);
        let ys = self.positions.values().map(|(_, y)| *y);
        (
            xs.clone().min().unwrap_or(0),
            xs.max().unwrap_or(0),
            ys.clone().min().unwrap_or(0),
            ys.max().unwrap_or(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node::Node;

    fn graph_with_edges(ids: &[NodeId], edges: &[(NodeId, NodeId)]) -> ScheduleGraph {
        let mut graph = ScheduleGraph::new();
        for id in ids {
            graph.insert(*id, Node::scheduled(1, 0, 1));
        }
        for (from, to) in edges {
            graph.add_edge(*from, *to);
        }
        graph
    }

    #[test]
    fn join_node_sits_below_both_sources() {
        let graph = graph_with_edges(&[1, 2, 3], &[(1, 3), (2, 3)]);
        let layering = layer_graph(&graph, 3).unwrap();

        assert_eq!(
            layering.levels(),
            BTreeMap::from([(1, 0), (2, 0), (3, 1)])
        );
        assert_eq!(layering.row_of(LayerNode::Source), Some(0));
        assert_eq!(layering.row_of(LayerNode::Sink), Some(3));
    }

    #[test]
    fn level_follows_longest_path() {
        // 1 -> 2 -> 3 and a shortcut 1 -> 3.
        let graph = graph_with_edges(&[1, 2, 3], &[(1, 2), (2, 3), (1, 3)]);
        let layering = layer_graph(&graph, 3).unwrap();

        assert_eq!(layering.level_of(3), Some(2));
    }

    #[test]
    fn isolated_node_is_level_zero() {
        let graph = graph_with_edges(&[4], &[]);
        let layering = layer_graph(&graph, 3).unwrap();

        assert_eq!(layering.level_of(4), Some(0));
        assert_eq!(layering.row_of(LayerNode::Sink), Some(2));
    }

    #[test]
    fn rows_are_centred_with_floor_division() {
        let graph = graph_with_edges(&[1, 2, 3], &[]);
        let layering = layer_graph(&graph, 3).unwrap();

        let mut xs: Vec<i64> = [1, 2, 3]
            .iter()
            .map(|id| layering.position_of(LayerNode::Node(*id)).unwrap().0)
            .collect();
        xs.sort();
        assert_eq!(xs, vec![-5, -2, 1]);
        assert_eq!(layering.position_of(LayerNode::Source), Some((-2, 0)));
        assert_eq!(layering.position_of(LayerNode::Node(1)).unwrap().1, -1);
    }

    #[test]
    fn cycle_is_reported() {
        let graph = graph_with_edges(&[1, 2], &[(1, 2), (2, 1)]);
        let err = layer_graph(&graph, 3).unwrap_err();
        assert!(matches!(err, SchedvizError::DagCycle(_)));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = graph_with_edges(&[1], &[(1, 1)]);
        assert!(layer_graph(&graph, 3).is_err());
    }

    #[test]
    fn empty_graph_has_only_anchors() {
        let layering = layer_graph(&ScheduleGraph::new(), 3).unwrap();
        assert!(layering.levels().is_empty());
        assert_eq!(layering.order().len(), 2);
    }
}
