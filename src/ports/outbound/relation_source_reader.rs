use crate::shared::Result;
use std::path::Path;

/// RelationSourceReader port for loading the raw family data table
pub trait RelationSourceReader {
    /// Reads the uploaded table as text
    ///
    /// # Arguments
    /// * `path` - Location of the CSV file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a CSV file
    /// - The file cannot be read due to permissions or I/O errors
    fn read_relation_source(&self, path: &Path) -> Result<String>;
}
