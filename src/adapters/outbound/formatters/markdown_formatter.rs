use crate::application::read_models::{EdgeView, HierarchyReadModel, LevelView, NodeView};
use crate::ports::outbound::GraphFormatter;
use crate::shared::error::HierarchyError;
use crate::shared::Result;

const GENERATION_TABLE_HEADER: &str = "| Level | Generation | Members |\n";
const GENERATION_TABLE_SEPARATOR: &str = "|------:|------------|---------|\n";
const RELATIONSHIP_TABLE_HEADER: &str = "| Parent | Child | Found While |\n";
const RELATIONSHIP_TABLE_SEPARATOR: &str = "|--------|-------|-------------|\n";

/// MarkdownFormatter adapter rendering a hierarchy as a readable report
///
/// Produces a generation table (one row per level, members left to right,
/// focal person in bold) followed by a relationship table listing every edge.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String, model: &HierarchyReadModel) {
        output.push_str("# Family Hierarchy Report\n\n");
        output.push_str(&format!(
            "- **Focal person**: {}\n",
            Self::escape_cell(&model.focal)
        ));
        output.push_str(&format!(
            "- **Requested by**: {}\n",
            Self::escape_cell(&model.requested_by)
        ));
        output.push_str(&format!("- **Generated**: {}\n", model.metadata.timestamp));
        output.push_str(&format!(
            "- **Tool**: {} {}\n",
            model.metadata.tool_name, model.metadata.tool_version
        ));
        output.push_str(&format!("- **Report ID**: {}\n\n", model.metadata.report_id));
    }

    fn render_generations(&self, output: &mut String, levels: &[LevelView], nodes: &[NodeView]) {
        output.push_str("## Generations\n\n");
        output.push_str(GENERATION_TABLE_HEADER);
        output.push_str(GENERATION_TABLE_SEPARATOR);

        let focal = nodes.iter().find(|node| node.is_focal).map(|node| node.id.as_str());
        for level in levels {
            let members = level
                .members
                .iter()
                .map(|m| {
                    if Some(m.as_str()) == focal {
                        format!("**{}**", Self::escape_cell(m))
                    } else {
                        Self::escape_cell(m)
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                level.level, level.label, members
            ));
        }
        output.push('\n');
    }

    fn render_relationships(&self, output: &mut String, edges: &[EdgeView]) {
        output.push_str("## Relationships\n\n");

        if edges.is_empty() {
            output.push_str("*No relationships within the requested levels.*\n");
            return;
        }

        output.push_str(RELATIONSHIP_TABLE_HEADER);
        output.push_str(RELATIONSHIP_TABLE_SEPARATOR);
        for edge in edges {
            let direction = if edge.discovered_upward {
                "ancestors"
            } else {
                "descendants"
            };
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_cell(&edge.source),
                Self::escape_cell(&edge.target),
                direction
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for MarkdownFormatter {
    fn format(&self, model: &HierarchyReadModel) -> Result<String> {
        if model.is_empty() {
            return Err(HierarchyError::NoGraph.into());
        }

        let mut output = String::new();
        self.render_header(&mut output, model);
        self.render_generations(&mut output, &model.levels, &model.nodes);
        self.render_relationships(&mut output, &model.edges);
        Ok(output)
    }
}
