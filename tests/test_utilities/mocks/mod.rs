/// Mock implementations for testing
mod mock_identity_provider;
mod mock_progress_reporter;
mod mock_relation_source_reader;
mod mock_upload_repository;

pub use mock_identity_provider::MockIdentityProvider;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_relation_source_reader::MockRelationSourceReader;
pub use mock_upload_repository::MockUploadRepository;
