use crate::hierarchy::domain::{HierarchyGraph, HierarchyNode};
use std::collections::BTreeMap;

/// Horizontal distance between neighbouring nodes on the same level
pub const HORIZONTAL_SPACING: f64 = 150.0;

/// LayeredLayout service assigning 2-D positions
///
/// Every level is centered on `x = 0` on its own: a level of `k` nodes spans
/// `(k - 1) * 150` and starts at half that to the left. Levels are not
/// coordinated with each other, so a child can end up horizontally far
/// from the parent that produced it.
pub struct LayeredLayout;

impl LayeredLayout {
    /// Positions all nodes of `graph` in place.
    pub fn apply(graph: &mut HierarchyGraph) {
        Self::layout(graph.nodes_mut());
    }

    /// Positions `nodes` in place
    ///
    /// Within a level the order of `nodes` is kept: the first node of a
    /// level is leftmost. Running this twice on the same sequence gives the
    /// same coordinates.
    pub fn layout(nodes: &mut [HierarchyNode]) {
        let mut levels: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for (index, node) in nodes.iter().enumerate() {
            levels.entry(node.level()).or_default().push(index);
        }

        for members in levels.values() {
            let start_x = Self::start_x(members.len());
            for (slot, &index) in members.iter().enumerate() {
                nodes[index].place(start_x + slot as f64 * HORIZONTAL_SPACING);
            }
        }
    }

    fn start_x(count: usize) -> f64 {
        let total_width = count.saturating_sub(1) as f64 * HORIZONTAL_SPACING;
        -total_width / 2.0
    }
}
