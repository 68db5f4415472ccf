use crate::ports::outbound::RelationSourceReader;
use crate::shared::error::HierarchyError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter reading family data files from disk
///
/// Only regular `.csv` files up to [`MAX_FILE_SIZE`] are accepted;
/// anything else is refused as an invalid upload.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn has_csv_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    }

    fn invalid(path: &Path, reason: impl Into<String>) -> anyhow::Error {
        HierarchyError::InvalidSourceFile {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
        .into()
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RelationSourceReader for FileSystemReader {
    fn read_relation_source(&self, path: &Path) -> Result<String> {
        if !Self::has_csv_extension(path) {
            return Err(Self::invalid(path, "the file does not have a .csv extension"));
        }

        if fs::symlink_metadata(path).is_err() {
            return Err(HierarchyError::FileReadError {
                path: path.to_path_buf(),
                details: "file does not exist".to_string(),
            }
            .into());
        }

        let size = validate_regular_file(path, "family data CSV")
            .map_err(|e| Self::invalid(path, e.to_string()))?;
        validate_file_size(size, path, MAX_FILE_SIZE)
            .map_err(|e| Self::invalid(path, e.to_string()))?;

        fs::read_to_string(path).map_err(|e| {
            HierarchyError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
