use super::{HierarchyEdge, HierarchyNode, PersonName};
use std::collections::BTreeSet;

/// Nodes and edges produced by one expansion pass, in discovery order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HierarchyChain {
    nodes: Vec<HierarchyNode>,
    edges: Vec<HierarchyEdge>,
}

impl HierarchyChain {
    pub fn new(nodes: Vec<HierarchyNode>, edges: Vec<HierarchyEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[HierarchyNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[HierarchyEdge] {
        &self.edges
    }

    pub fn into_parts(self) -> (Vec<HierarchyNode>, Vec<HierarchyEdge>) {
        (self.nodes, self.edges)
    }
}

/// HierarchyGraph aggregate: the merged ancestor/descendant graph around a
/// focal person
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyGraph {
    focal: PersonName,
    nodes: Vec<HierarchyNode>,
    edges: Vec<HierarchyEdge>,
}

impl HierarchyGraph {
    pub fn new(focal: PersonName, nodes: Vec<HierarchyNode>, edges: Vec<HierarchyEdge>) -> Self {
        Self {
            focal,
            nodes,
            edges,
        }
    }

    pub fn focal(&self) -> &PersonName {
        &self.focal
    }

    pub fn nodes(&self) -> &[HierarchyNode] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [HierarchyNode] {
        &mut self.nodes
    }

    pub fn edges(&self) -> &[HierarchyEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&HierarchyNode> {
        self.nodes.iter().find(|node| node.id().as_str() == id)
    }

    /// Nodes on `level`, in node-sequence order.
    pub fn nodes_at_level(&self, level: i32) -> Vec<&HierarchyNode> {
        self.nodes
            .iter()
            .filter(|node| node.level() == level)
            .collect()
    }

    /// Distinct levels present, ascending (oldest generation first).
    pub fn levels(&self) -> Vec<i32> {
        self.nodes
            .iter()
            .map(HierarchyNode::level)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of nodes above the focal person.
    pub fn ancestor_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.level() < 0).count()
    }

    /// Number of nodes below the focal person.
    pub fn descendant_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.level() > 0).count()
    }
}
