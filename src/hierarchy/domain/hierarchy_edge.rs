use super::PersonName;

/// Which expansion pass discovered an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
    Upward,
    Downward,
}

/// Directed parent → child link
///
/// The direction is always parent to child, whichever pass found it.
/// The id is `"{source}-{target}"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyEdge {
    id: String,
    source: PersonName,
    target: PersonName,
    discovery: Discovery,
}

impl HierarchyEdge {
    pub fn new(source: PersonName, target: PersonName, discovery: Discovery) -> Self {
        Self {
            id: format!("{}-{}", source, target),
            source,
            target,
            discovery,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &PersonName {
        &self.source
    }

    pub fn target(&self) -> &PersonName {
        &self.target
    }

    pub fn discovery(&self) -> Discovery {
        self.discovery
    }
}
