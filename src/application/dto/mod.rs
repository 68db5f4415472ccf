/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod report_request;
mod report_response;
mod upload_request;

pub use output_format::OutputFormat;
pub use report_request::{ReportRequest, ReportRequestBuilder, DEFAULT_LEVELS};
pub use report_response::ReportResponse;
pub use upload_request::{UploadRequest, UploadResponse};
