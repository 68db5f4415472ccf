use family_hierarchy::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock UploadRepository recording uploads, optionally failing every call
#[derive(Default, Clone)]
pub struct MockUploadRepository {
    pub records: Arc<Mutex<Vec<UploadRecord>>>,
    pub should_fail: bool,
}

impl MockUploadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<UploadRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl UploadRepository for MockUploadRepository {
    fn store_upload(&self, record: &UploadRecord) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock upload repository failure");
        }

        let mut records = self.records.lock().unwrap();
        records.push(record.clone());
        Ok(format!("familyData_{}_mock0000", records.len()))
    }
}
