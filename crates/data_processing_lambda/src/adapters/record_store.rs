use thiserror::Error;

use crate::runtime::contract::ProcessedRecord;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordWriteError {
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("record store unavailable: {0}")]
    Transient(String),
}

/// Upsert sink for processed records, keyed by `record.id`. Last writer
/// wins; the sink performs no existence check and no retry.
pub trait RecordSink {
    fn put_record(&self, record: &ProcessedRecord) -> Result<(), RecordWriteError>;
}
