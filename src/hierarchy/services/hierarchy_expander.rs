use crate::hierarchy::domain::{
    Discovery, HierarchyChain, HierarchyEdge, HierarchyNode, PersonName, Relation,
};
use std::collections::HashSet;

/// HierarchyExpander service for bounded breadth-first expansion
///
/// This service contains pure business logic: it reads a [`Relation`] and
/// produces the ancestor or descendant chain of a focal person. Each call
/// owns its visited set, so the two directions never interfere and can run
/// concurrently against the same relation.
pub struct HierarchyExpander;

/// Working state of a single expansion pass
struct Expansion<'a> {
    visited: HashSet<&'a PersonName>,
    nodes: Vec<HierarchyNode>,
    edges: Vec<HierarchyEdge>,
}

impl<'a> Expansion<'a> {
    fn new(focal: &'a PersonName) -> Self {
        let mut visited = HashSet::new();
        visited.insert(focal);
        Self {
            visited,
            nodes: vec![HierarchyNode::new(focal.clone(), 0)],
            edges: Vec::new(),
        }
    }

    /// Records `discovered` at `level` unless it was already visited.
    /// Returns true when the person is new.
    fn discover(
        &mut self,
        discovered: &'a PersonName,
        level: i32,
        edge: impl FnOnce() -> HierarchyEdge,
    ) -> bool {
        if !self.visited.insert(discovered) {
            return false;
        }
        self.nodes.push(HierarchyNode::new(discovered.clone(), level));
        self.edges.push(edge());
        true
    }

    fn finish(self) -> HierarchyChain {
        HierarchyChain::new(self.nodes, self.edges)
    }
}

impl HierarchyExpander {
    /// Collects up to `max_levels` generations of ancestors of `focal`
    ///
    /// Walks the inverse relation: at step `i` every relation key whose
    /// child list contains a member of the current frontier becomes a node
    /// at level `-i`, linked by a `parent → member` edge. Keys are scanned in
    /// relation order. The frontier only advances after a full step, and the
    /// walk stops early once a step discovers nobody.
    ///
    /// # Arguments
    /// * `relation` - The parent → children relation
    /// * `focal` - The person at level 0
    /// * `max_levels` - Maximum number of generations to climb
    ///
    /// # Returns
    /// The focal node followed by ancestors in discovery order, and one edge
    /// per discovered ancestor
    pub fn expand_upward(
        relation: &Relation,
        focal: &PersonName,
        max_levels: u32,
    ) -> HierarchyChain {
        let mut expansion = Expansion::new(focal);
        let mut frontier: Vec<&PersonName> = vec![focal];

        for step in 1..=max_levels {
            let level = -Self::depth(step);
            let mut next_frontier = Vec::new();

            for &person in &frontier {
                for parent in relation.parents_of(person) {
                    let discovered = expansion.discover(parent, level, || {
                        HierarchyEdge::new(parent.clone(), person.clone(), Discovery::Upward)
                    });
                    if discovered {
                        next_frontier.push(parent);
                    }
                }
            }

            if next_frontier.is_empty() {
                break;
            }
            frontier = next_frontier;
        }

        expansion.finish()
    }

    /// Collects up to `max_levels` generations of descendants of `focal`
    ///
    /// Mirror of [`HierarchyExpander::expand_upward`] walking the relation
    /// forward. Children are visited in their listed order, which later
    /// decides their left-to-right placement. A person with no relation
    /// entry contributes nothing.
    pub fn expand_downward(
        relation: &Relation,
        focal: &PersonName,
        max_levels: u32,
    ) -> HierarchyChain {
        let mut expansion = Expansion::new(focal);
        let mut frontier: Vec<&PersonName> = vec![focal];

        for step in 1..=max_levels {
            let level = Self::depth(step);
            let mut next_frontier = Vec::new();

            for &person in &frontier {
                let children = relation.children_of(person).unwrap_or_default();
                for child in children {
                    let discovered = expansion.discover(child, level, || {
                        HierarchyEdge::new(person.clone(), child.clone(), Discovery::Downward)
                    });
                    if discovered {
                        next_frontier.push(child);
                    }
                }
            }

            if next_frontier.is_empty() {
                break;
            }
            frontier = next_frontier;
        }

        expansion.finish()
    }

    // Each step discovers at least one new person, so a step never exceeds
    // the number of people in the relation.
    fn depth(step: u32) -> i32 {
        i32::try_from(step).unwrap_or(i32::MAX)
    }
}
