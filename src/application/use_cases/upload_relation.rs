use crate::application::dto::{UploadRequest, UploadResponse};
use crate::application::relation_store::RelationStore;
use crate::ports::outbound::{
    IdentityProvider, ProgressReporter, RelationParser, RelationSourceReader, UploadRecord,
    UploadRepository,
};
use crate::shared::error::HierarchyError;
use crate::shared::Result;

/// UploadRelationUseCase - loads a family CSV into the session store
///
/// The store is replaced only after the content parsed into a non-empty
/// relation. Persisting the raw upload is best effort: a failure is
/// reported as a warning and the parsed relation is still used.
///
/// # Type Parameters
/// * `RR` - RelationSourceReader implementation
/// * `RP` - RelationParser implementation
/// * `UR` - UploadRepository implementation
/// * `IP` - IdentityProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct UploadRelationUseCase<RR, RP, UR, IP, PR> {
    source_reader: RR,
    parser: RP,
    upload_repository: UR,
    identity_provider: IP,
    progress_reporter: PR,
}

impl<RR, RP, UR, IP, PR> UploadRelationUseCase<RR, RP, UR, IP, PR>
where
    RR: RelationSourceReader,
    RP: RelationParser,
    UR: UploadRepository,
    IP: IdentityProvider,
    PR: ProgressReporter,
{
    pub fn new(
        source_reader: RR,
        parser: RP,
        upload_repository: UR,
        identity_provider: IP,
        progress_reporter: PR,
    ) -> Self {
        Self {
            source_reader,
            parser,
            upload_repository,
            identity_provider,
            progress_reporter,
        }
    }

    /// Reads, parses and stores the relation named by `request`
    ///
    /// On any error before the final step `store` keeps its previous value.
    pub fn execute(
        &self,
        request: UploadRequest,
        store: &mut RelationStore,
    ) -> Result<UploadResponse> {
        let identity =
            self.identity_provider
                .current_identity()
                .ok_or_else(|| HierarchyError::NotSignedIn {
                    message: "You must be logged in to upload data.".to_string(),
                })?;

        self.progress_reporter.report(&format!(
            "📖 Loading family data from: {}",
            request.source_path.display()
        ));

        let content = self
            .source_reader
            .read_relation_source(&request.source_path)?;
        let relation = self.parser.parse_relation(&content)?;

        if relation.is_empty() {
            return Err(HierarchyError::EmptyRelation.into());
        }

        self.progress_reporter.report(&format!(
            "✅ Parsed {} parent row(s) covering {} person(s)",
            relation.len(),
            relation.person_count()
        ));

        let upload_id = if request.persist {
            self.persist(content, identity.uid())
        } else {
            None
        };

        let response = UploadResponse {
            upload_id,
            parent_count: relation.len(),
            person_count: relation.person_count(),
        };
        store.replace(relation);

        Ok(response)
    }

    fn persist(&self, csv_data: String, uploader_id: &str) -> Option<String> {
        let record = UploadRecord::new(csv_data, uploader_id.to_string());
        match self.upload_repository.store_upload(&record) {
            Ok(id) => {
                self.progress_reporter
                    .report(&format!("💾 Upload stored as {}", id));
                Some(id)
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to store upload, continuing with in-memory data: {}",
                    e
                ));
                None
            }
        }
    }
}
