//! Builder for constructing HierarchyReadModel from domain objects

use super::hierarchy_read_model::{
    EdgeView, HierarchyReadModel, LevelView, NodeView, ReportMetadataView,
};
use crate::application::dto::ReportResponse;
use crate::hierarchy::domain::{Discovery, HierarchyGraph, ReportMetadata};
use crate::hierarchy::policies::{GenerationNaming, LevelPalette};

/// Builder for constructing HierarchyReadModel from a report response
pub struct HierarchyReadModelBuilder;

impl HierarchyReadModelBuilder {
    pub fn build(response: &ReportResponse) -> HierarchyReadModel {
        let graph = &response.graph;

        HierarchyReadModel {
            metadata: Self::build_metadata(&response.metadata),
            focal: graph.focal().to_string(),
            requested_by: response.requested_by.greeting_name().to_string(),
            nodes: Self::build_nodes(graph),
            edges: Self::build_edges(graph),
            levels: Self::build_levels(graph),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }

    fn build_nodes(graph: &HierarchyGraph) -> Vec<NodeView> {
        graph
            .nodes()
            .iter()
            .map(|node| {
                let position = node.position();
                NodeView {
                    id: node.id().to_string(),
                    label: node.id().to_string(),
                    level: node.level(),
                    x: position.x,
                    y: position.y,
                    color: LevelPalette::color_for(node.level()).to_string(),
                    is_focal: node.id() == graph.focal(),
                }
            })
            .collect()
    }

    fn build_edges(graph: &HierarchyGraph) -> Vec<EdgeView> {
        graph
            .edges()
            .iter()
            .map(|edge| EdgeView {
                id: edge.id().to_string(),
                source: edge.source().to_string(),
                target: edge.target().to_string(),
                discovered_upward: edge.discovery() == Discovery::Upward,
            })
            .collect()
    }

    /// Members are ordered by x so the table reads left to right.
    fn build_levels(graph: &HierarchyGraph) -> Vec<LevelView> {
        graph
            .levels()
            .into_iter()
            .map(|level| {
                let mut members = graph.nodes_at_level(level);
                members.sort_by(|a, b| a.position().x.total_cmp(&b.position().x));
                LevelView {
                    level,
                    label: GenerationNaming::label(level),
                    members: members.iter().map(|n| n.id().to_string()).collect(),
                }
            })
            .collect()
    }
}
