//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of a generated hierarchy for formatters.

pub mod hierarchy_read_model;
pub mod hierarchy_read_model_builder;

pub use hierarchy_read_model::{
    EdgeView, HierarchyReadModel, LevelView, NodeView, ReportMetadataView,
};
pub use hierarchy_read_model_builder::HierarchyReadModelBuilder;
