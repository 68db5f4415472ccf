pub mod hierarchy_edge;
pub mod hierarchy_graph;
pub mod hierarchy_node;
pub mod identity;
pub mod person_name;
pub mod relation;
pub mod report_metadata;

pub use hierarchy_edge::{Discovery, HierarchyEdge};
pub use hierarchy_graph::{HierarchyChain, HierarchyGraph};
pub use hierarchy_node::{HierarchyNode, Position, VERTICAL_PITCH};
pub use identity::Identity;
pub use person_name::PersonName;
pub use relation::{Relation, RelationEntry};
pub use report_metadata::ReportMetadata;
