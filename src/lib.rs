//! family-hierarchy - layered ancestor/descendant graphs from family CSV tables
//!
//! Given a `Parent,Children` table and a focal person, this library collects
//! a bounded number of ancestor and descendant generations, merges them into
//! one graph and assigns every person a position on a layered canvas.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`hierarchy`): relation, graph types, expansion, merge and layout
//! - **Application Layer** (`application`): use cases, DTOs, read models, relation store
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use family_hierarchy::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let identity = ConfiguredIdentityProvider::from_sources(Some("alice"), None);
//! let mut store = RelationStore::new();
//!
//! let upload = UploadRelationUseCase::new(
//!     FileSystemReader::new(),
//!     CsvRelationParser::new(),
//!     FileSystemUploadRepository::new(PathBuf::from(".family-hierarchy/uploads")),
//!     identity.clone(),
//!     StderrProgressReporter::new(),
//! );
//! upload.execute(UploadRequest::new(PathBuf::from("family.csv"), true), &mut store)?;
//!
//! let report = GenerateReportUseCase::new(identity, StderrProgressReporter::new());
//! let request = ReportRequest::builder()
//!     .person_name("Alice")
//!     .up_levels(2)
//!     .down_levels(1)
//!     .build()?;
//! let response = report.execute(store.current(), request)?;
//!
//! let model = HierarchyReadModelBuilder::build(&response);
//! println!("{}", FlowJsonFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod hierarchy;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemUploadRepository, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{FlowJsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::identity::ConfiguredIdentityProvider;
    pub use crate::adapters::outbound::ingest::CsvRelationParser;
    pub use crate::application::dto::{
        OutputFormat, ReportRequest, ReportResponse, UploadRequest, UploadResponse,
    };
    pub use crate::application::read_models::{HierarchyReadModel, HierarchyReadModelBuilder};
    pub use crate::application::relation_store::RelationStore;
    pub use crate::application::use_cases::{GenerateReportUseCase, UploadRelationUseCase};
    pub use crate::hierarchy::domain::{
        Discovery, HierarchyChain, HierarchyEdge, HierarchyGraph, HierarchyNode, Identity,
        PersonName, Position, Relation,
    };
    pub use crate::hierarchy::policies::{GenerationNaming, LevelPalette};
    pub use crate::hierarchy::services::{
        GraphMerger, HierarchyExpander, LayeredLayout, ReportGenerator,
    };
    pub use crate::ports::inbound::ReportGenerationPort;
    pub use crate::ports::outbound::{
        GraphFormatter, IdentityProvider, OutputPresenter, ProgressReporter, RelationParser,
        RelationSourceReader, UploadRecord, UploadRepository,
    };
    pub use crate::shared::Result;
}
