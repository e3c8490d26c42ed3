use thiserror::Error;

/// Failure kinds a source fetch can surface. Not-found stays distinct from
/// access and transient failures so the pipeline can map each one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ObjectFetchError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("object store unavailable: {0}")]
    Transient(String),
}

/// Read-only view of the object store holding source content.
pub trait SourceObjectStore {
    fn fetch_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ObjectFetchError>;
}
