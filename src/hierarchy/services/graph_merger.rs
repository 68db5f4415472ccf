use crate::hierarchy::domain::{HierarchyChain, HierarchyGraph, PersonName};
use std::collections::HashSet;

/// GraphMerger service joining the upward and downward chains
///
/// Nodes are unioned by id with the first occurrence winning, so the
/// upward copy of a person is kept when a cycle makes them reachable in
/// both directions. Edge lists are concatenated, upward first, with no
/// deduplication across the two passes.
pub struct GraphMerger;

impl GraphMerger {
    pub fn merge(
        focal: &PersonName,
        upward: HierarchyChain,
        downward: HierarchyChain,
    ) -> HierarchyGraph {
        let (up_nodes, up_edges) = upward.into_parts();
        let (down_nodes, down_edges) = downward.into_parts();

        let mut seen_nodes: HashSet<PersonName> = HashSet::new();
        let nodes = up_nodes
            .into_iter()
            .chain(down_nodes)
            .filter(|node| seen_nodes.insert(node.id().clone()))
            .collect();

        let edges = up_edges.into_iter().chain(down_edges).collect();

        HierarchyGraph::new(focal.clone(), nodes, edges)
    }
}
