//! Hierarchy read model for query operations

/// Main read model for a generated hierarchy report
#[derive(Debug, Clone)]
pub struct HierarchyReadModel {
    /// Report metadata
    pub metadata: ReportMetadataView,
    /// Name of the focal person
    pub focal: String,
    /// Display name of whoever requested the report
    pub requested_by: String,
    /// Positioned nodes in graph order
    pub nodes: Vec<NodeView>,
    /// Parent → child edges in graph order
    pub edges: Vec<EdgeView>,
    /// Nodes grouped by generation, oldest first
    pub levels: Vec<LevelView>,
}

impl HierarchyReadModel {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// View representation of report metadata
#[derive(Debug, Clone)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

/// View representation of a positioned person
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    pub id: String,
    pub label: String,
    pub level: i32,
    pub x: f64,
    pub y: f64,
    /// Background color from the generation palette
    pub color: String,
    pub is_focal: bool,
}

/// View representation of a parent → child edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeView {
    pub id: String,
    pub source: String,
    pub target: String,
    /// True when the edge was found while climbing towards ancestors
    pub discovered_upward: bool,
}

/// View of one generation row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelView {
    pub level: i32,
    pub label: String,
    /// Member names, left to right
    pub members: Vec<String>,
}
