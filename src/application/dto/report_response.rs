use crate::hierarchy::domain::{HierarchyGraph, Identity, ReportMetadata};

/// ReportResponse - result of the hierarchy report use case
///
/// Carries the laid-out graph; adapters turn it into a read model and
/// format it.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Merged and positioned hierarchy graph
    pub graph: HierarchyGraph,
    /// Report metadata (timestamp, tool info, report id)
    pub metadata: ReportMetadata,
    /// Who requested the report
    pub requested_by: Identity,
}

impl ReportResponse {
    pub fn new(graph: HierarchyGraph, metadata: ReportMetadata, requested_by: Identity) -> Self {
        Self {
            graph,
            metadata,
            requested_by,
        }
    }
}
