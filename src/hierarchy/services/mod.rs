mod graph_merger;
mod hierarchy_expander;
mod layered_layout;
mod report_generator;

pub use graph_merger::GraphMerger;
pub use hierarchy_expander::HierarchyExpander;
pub use layered_layout::{LayeredLayout, HORIZONTAL_SPACING};
pub use report_generator::ReportGenerator;
