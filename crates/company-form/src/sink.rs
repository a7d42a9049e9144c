// File: src/sink.rs
// Purpose: Consumers of successful submissions

use tracing::{info, warn};

use crate::record::FormRecord;

/// Receives each successfully submitted record, exactly once per submission
pub trait SubmissionSink {
    fn observe(&mut self, record: &FormRecord);
}

/// Logs every record as JSON at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn observe(&mut self, record: &FormRecord) {
        match record.to_json() {
            Ok(json) => info!(record = %json, "form submitted"),
            Err(e) => warn!("form submitted, but the record could not be serialized: {}", e),
        }
    }
}

/// Keeps every observed record in memory, oldest first
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<FormRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[FormRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&FormRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SubmissionSink for MemorySink {
    fn observe(&mut self, record: &FormRecord) {
        self.records.push(record.clone());
    }
}
