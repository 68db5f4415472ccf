/// Use cases module containing application business logic orchestration
mod generate_report;
mod upload_relation;

pub use generate_report::GenerateReportUseCase;
pub use upload_relation::UploadRelationUseCase;
