/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, identity, console, etc.).
pub mod graph_formatter;
pub mod identity_provider;
pub mod output_presenter;
pub mod progress_reporter;
pub mod relation_parser;
pub mod relation_source_reader;
pub mod upload_repository;

pub use graph_formatter::GraphFormatter;
pub use identity_provider::IdentityProvider;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use relation_parser::RelationParser;
pub use relation_source_reader::RelationSourceReader;
pub use upload_repository::{UploadRecord, UploadRepository};
