use crate::shared::Result;

/// A raw upload together with the identity that made it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub csv_data: String,
    pub uploader_id: String,
}

impl UploadRecord {
    pub fn new(csv_data: String, uploader_id: String) -> Self {
        Self {
            csv_data,
            uploader_id,
        }
    }
}

/// UploadRepository port persisting uploaded family data
///
/// The core never reads uploads back; it only keeps the parsed relation
/// in memory for the current session.
pub trait UploadRepository {
    /// Stores the record and returns its generated identifier
    ///
    /// # Errors
    /// Returns an error if the store cannot be written. Callers treat this
    /// as a warning: the parsed relation stays usable.
    fn store_upload(&self, record: &UploadRecord) -> Result<String>;
}
