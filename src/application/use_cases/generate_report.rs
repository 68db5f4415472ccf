use crate::application::dto::{ReportRequest, ReportResponse};
use crate::hierarchy::domain::{Identity, Relation};
use crate::hierarchy::services::{GraphMerger, HierarchyExpander, LayeredLayout, ReportGenerator};
use crate::ports::inbound::ReportGenerationPort;
use crate::ports::outbound::{IdentityProvider, ProgressReporter};
use crate::shared::error::HierarchyError;
use crate::shared::Result;

const REPORT_STAGES: usize = 4;

/// GenerateReportUseCase - Core use case for hierarchy report generation
///
/// Orchestrates sign-in check, focal lookup, both expansions, the merge
/// and the layout against a relation snapshot.
///
/// # Type Parameters
/// * `IP` - IdentityProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<IP, PR> {
    identity_provider: IP,
    progress_reporter: PR,
}

impl<IP, PR> GenerateReportUseCase<IP, PR>
where
    IP: IdentityProvider,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(identity_provider: IP, progress_reporter: PR) -> Self {
        Self {
            identity_provider,
            progress_reporter,
        }
    }

    /// Returns the signed-in user, or the report's sign-in rejection.
    /// Safe to call before any data is loaded.
    pub fn require_identity(&self) -> Result<Identity> {
        self.identity_provider.current_identity().ok_or_else(|| {
            HierarchyError::NotSignedIn {
                message: "Please sign in to generate a report.".to_string(),
            }
            .into()
        })
    }

    /// Executes the report generation use case
    ///
    /// # Arguments
    /// * `relation` - The currently loaded parent → children relation
    /// * `request` - Validated focal person and level bounds
    ///
    /// # Returns
    /// ReportResponse holding the laid-out graph, metadata and requester.
    /// Rejections (not signed in, unknown focal) happen before any traversal.
    pub fn execute(&self, relation: &Relation, request: ReportRequest) -> Result<ReportResponse> {
        let identity = self.require_identity()?;

        if !relation.contains_parent(&request.focal) {
            return Err(HierarchyError::PersonNotFound {
                name: request.focal.to_string(),
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "🌳 Building hierarchy for {} ({} up, {} down)",
            request.focal, request.up_levels, request.down_levels
        ));

        self.progress_reporter
            .report_progress(1, REPORT_STAGES, Some("ancestors"));
        let upward = HierarchyExpander::expand_upward(relation, &request.focal, request.up_levels);

        self.progress_reporter
            .report_progress(2, REPORT_STAGES, Some("descendants"));
        let downward =
            HierarchyExpander::expand_downward(relation, &request.focal, request.down_levels);

        self.progress_reporter
            .report_progress(3, REPORT_STAGES, Some("merge"));
        let mut graph = GraphMerger::merge(&request.focal, upward, downward);

        self.progress_reporter
            .report_progress(4, REPORT_STAGES, Some("layout"));
        LayeredLayout::apply(&mut graph);

        self.progress_reporter.report_completion(&format!(
            "✅ Hierarchy ready: {} ancestor(s), {} descendant(s), {} edge(s)",
            graph.ancestor_count(),
            graph.descendant_count(),
            graph.edge_count()
        ));

        let metadata = ReportGenerator::generate_default_metadata();

        Ok(ReportResponse::new(graph, metadata, identity))
    }
}

impl<IP, PR> ReportGenerationPort for GenerateReportUseCase<IP, PR>
where
    IP: IdentityProvider,
    PR: ProgressReporter,
{
    fn generate_report(
        &self,
        relation: &Relation,
        request: ReportRequest,
    ) -> Result<ReportResponse> {
        self.execute(relation, request)
    }
}
