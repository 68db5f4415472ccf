use crate::application::dto::{ReportRequest, ReportResponse};
use crate::hierarchy::domain::Relation;
use crate::shared::Result;

/// ReportGenerationPort - Inbound port for the hierarchy report use case
///
/// This port defines the interface that driving adapters (CLI, tests, a
/// future HTTP front end) use to request a laid-out hierarchy graph.
pub trait ReportGenerationPort {
    /// Generates the hierarchy graph for the focal person in `request`
    ///
    /// # Arguments
    /// * `relation` - The relation currently held by the session
    /// * `request` - Validated focal person and level counts
    ///
    /// # Errors
    /// Returns an error if:
    /// - No user is signed in
    /// - The focal person is not a parent key of `relation`
    fn generate_report(&self, relation: &Relation, request: ReportRequest)
        -> Result<ReportResponse>;
}
