use crate::hierarchy::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportGenerator service for generating report metadata
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates metadata with the current timestamp and a unique report id
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the report
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Generates metadata with this crate's name and compile-time version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
