use crate::application::read_models::{EdgeView, HierarchyReadModel, NodeView};
use crate::ports::outbound::GraphFormatter;
use crate::shared::error::HierarchyError;
use crate::shared::Result;
use serde::Serialize;

const EDGE_STROKE: &str = "#888";
const EDGE_STROKE_WIDTH: u32 = 2;
const ARROW_MARKER: &str = "arrowclosed";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FlowDocument<'a> {
    metadata: FlowMetadata<'a>,
    nodes: Vec<FlowNode<'a>>,
    edges: Vec<FlowEdge<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FlowMetadata<'a> {
    timestamp: &'a str,
    tool: FlowTool<'a>,
    report_id: &'a str,
    focal: &'a str,
    requested_by: &'a str,
}

#[derive(Debug, Serialize)]
struct FlowTool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct FlowNode<'a> {
    id: &'a str,
    data: NodeData<'a>,
    position: FlowPosition,
    level: i32,
    style: NodeStyle<'a>,
}

#[derive(Debug, Serialize)]
struct NodeData<'a> {
    label: &'a str,
}

#[derive(Debug, Serialize)]
struct FlowPosition {
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeStyle<'a> {
    background_color: &'a str,
    border_radius: &'static str,
    box_shadow: &'static str,
    border: &'static str,
    padding: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FlowEdge<'a> {
    id: &'a str,
    source: &'a str,
    target: &'a str,
    animated: bool,
    style: EdgeStyle,
    marker_end: MarkerEnd,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeStyle {
    stroke: &'static str,
    stroke_width: u32,
}

#[derive(Debug, Serialize)]
struct MarkerEnd {
    #[serde(rename = "type")]
    marker_type: &'static str,
}

/// FlowJsonFormatter adapter emitting the node/edge document a graph
/// canvas renders directly
///
/// Every node carries its generation color and final position; every edge
/// is animated and ends in a closed arrowhead.
pub struct FlowJsonFormatter;

impl FlowJsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn node(view: &NodeView) -> FlowNode<'_> {
        FlowNode {
            id: &view.id,
            data: NodeData { label: &view.label },
            position: FlowPosition {
                x: view.x,
                y: view.y,
            },
            level: view.level,
            style: NodeStyle {
                background_color: &view.color,
                border_radius: "8px",
                box_shadow: "2px 2px 5px rgba(0, 0, 0, 0.2)",
                border: "1px solid #ccc",
                padding: "10px",
            },
        }
    }

    fn edge(view: &EdgeView) -> FlowEdge<'_> {
        FlowEdge {
            id: &view.id,
            source: &view.source,
            target: &view.target,
            animated: true,
            style: EdgeStyle {
                stroke: EDGE_STROKE,
                stroke_width: EDGE_STROKE_WIDTH,
            },
            marker_end: MarkerEnd {
                marker_type: ARROW_MARKER,
            },
        }
    }
}

impl Default for FlowJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for FlowJsonFormatter {
    fn format(&self, model: &HierarchyReadModel) -> Result<String> {
        if model.is_empty() {
            return Err(HierarchyError::NoGraph.into());
        }

        let document = FlowDocument {
            metadata: FlowMetadata {
                timestamp: &model.metadata.timestamp,
                tool: FlowTool {
                    name: &model.metadata.tool_name,
                    version: &model.metadata.tool_version,
                },
                report_id: &model.metadata.report_id,
                focal: &model.focal,
                requested_by: &model.requested_by,
            },
            nodes: model.nodes.iter().map(Self::node).collect(),
            edges: model.edges.iter().map(Self::edge).collect(),
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
