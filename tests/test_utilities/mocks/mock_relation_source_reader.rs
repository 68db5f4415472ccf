use family_hierarchy::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock RelationSourceReader serving in-memory CSV content by path
#[derive(Default)]
pub struct MockRelationSourceReader {
    files: HashMap<PathBuf, String>,
}

impl MockRelationSourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl RelationSourceReader for MockRelationSourceReader {
    fn read_relation_source(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock file not found: {}", path.display()))
    }
}
