use std::path::PathBuf;

/// UploadRequest - request to load a family data table into the session
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Path to the CSV file
    pub source_path: PathBuf,
    /// Whether the raw upload should be persisted
    pub persist: bool,
}

impl UploadRequest {
    pub fn new(source_path: PathBuf, persist: bool) -> Self {
        Self {
            source_path,
            persist,
        }
    }
}

/// UploadResponse - summary of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResponse {
    /// Identifier assigned by the upload store; `None` when persistence was
    /// skipped or failed
    pub upload_id: Option<String>,
    /// Number of parent rows in the relation
    pub parent_count: usize,
    /// Number of distinct people mentioned
    pub person_count: usize,
}
