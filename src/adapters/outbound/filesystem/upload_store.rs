use crate::ports::outbound::{UploadRecord, UploadRepository};
use crate::shared::error::HierarchyError;
use crate::shared::security::validate_store_directory;
use crate::shared::Result;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Document written for each stored upload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadDocument<'a> {
    csv_data: &'a str,
    uploader_id: &'a str,
    uploaded_at: String,
}

/// FileSystemUploadRepository adapter keeping raw uploads as JSON documents
///
/// Each upload becomes `<root_dir>/<id>.json` where the id has the form
/// `familyData_<millis>_<suffix>`.
pub struct FileSystemUploadRepository {
    root_dir: PathBuf,
}

impl FileSystemUploadRepository {
    pub fn new(root_dir: PathBuf) -> Self {
        Self { root_dir }
    }

    fn next_upload_id() -> String {
        let millis = Utc::now().timestamp_millis();
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!("familyData_{}_{}", millis, &suffix[..8])
    }

    fn store_error(&self, path: PathBuf, details: impl Into<String>) -> anyhow::Error {
        HierarchyError::UploadStoreError {
            path,
            details: details.into(),
        }
        .into()
    }
}

impl UploadRepository for FileSystemUploadRepository {
    fn store_upload(&self, record: &UploadRecord) -> Result<String> {
        validate_store_directory(&self.root_dir)
            .map_err(|e| self.store_error(self.root_dir.clone(), e.to_string()))?;
        fs::create_dir_all(&self.root_dir)
            .map_err(|e| self.store_error(self.root_dir.clone(), e.to_string()))?;

        let upload_id = Self::next_upload_id();
        let path = self.root_dir.join(format!("{}.json", upload_id));

        let document = UploadDocument {
            csv_data: &record.csv_data,
            uploader_id: &record.uploader_id,
            uploaded_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| self.store_error(path.clone(), e.to_string()))?;

        fs::write(&path, json).map_err(|e| self.store_error(path.clone(), e.to_string()))?;

        Ok(upload_id)
    }
}
