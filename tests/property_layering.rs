// tests/property_layering.rs

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use schedviz::graph::{NodeId, ScheduleGraph, layer_graph};
use schedviz_test_utils::builders::GraphBuilder;

// Acyclic by construction: node i may only depend on nodes 0..i.
fn dag_strategy(max_nodes: usize) -> impl Strategy<Value = (ScheduleGraph, Vec<(NodeId, NodeId)>)> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_nodes),
            num_nodes,
        )
        .prop_map(move |raw_deps| {
            let mut edges = Vec::new();
            for (i, potential) in raw_deps.into_iter().enumerate() {
                if i == 0 {
                    continue;
                }
                let deps: BTreeSet<usize> = potential.into_iter().map(|d| d % i).collect();
                for dep in deps {
                    edges.push((dep as NodeId, i as NodeId));
                }
            }
            let graph = GraphBuilder::new()
                .nodes(0..num_nodes as NodeId)
                .edges(&edges)
                .build();
            (graph, edges)
        })
    })
}

proptest! {
    #[test]
    fn level_is_one_below_deepest_predecessor((graph, edges) in dag_strategy(12)) {
        let layering = layer_graph(&graph, 3).unwrap();
        let levels = layering.levels();

        let mut preds: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();
        for (from, to) in &edges {
            preds.entry(*to).or_default().push(*from);
        }

        for id in graph.ids() {
            let expected = preds
                .get(&id)
                .and_then(|ps| ps.iter().map(|p| levels[p]).max())
                .map_or(0, |deepest| deepest + 1);
            prop_assert_eq!(levels[&id], expected, "node {}", id);
        }
    }

    #[test]
    fn sources_are_level_zero((graph, edges) in dag_strategy(12)) {
        let layering = layer_graph(&graph, 3).unwrap();
        let targets: BTreeSet<NodeId> = edges.iter().map(|(_, to)| *to).collect();

        for id in graph.ids().filter(|id| !targets.contains(id)) {
            prop_assert_eq!(layering.level_of(id), Some(0));
        }
    }

    #[test]
    fn relayering_is_stable((graph, _edges) in dag_strategy(12)) {
        let first = layer_graph(&graph, 3).unwrap();
        let second = layer_graph(&graph, 3).unwrap();
        prop_assert_eq!(first.levels(), second.levels());
        prop_assert_eq!(first.order(), second.order());
    }
}
