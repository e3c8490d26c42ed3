use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success message returned to HTTP callers, JSON-encoded into the response
/// body by the response builder.
pub const SUCCESS_MESSAGE: &str = "Data processed successfully!";

/// Bucket and key identifying one source object in the object store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceLocator {
    pub bucket: String,
    pub key: String,
}

/// How the current invocation reached the handler. Carried on the request so
/// the response builder can shape the reply for the trigger that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationKind {
    StorageEvent,
    HttpRequest,
}

impl InvocationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StorageEvent => "storage_event",
            Self::HttpRequest => "http_request",
        }
    }
}

/// Normalized invocation input, immutable once parsed from the trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingRequest {
    pub locator: SourceLocator,
    pub kind: InvocationKind,
}

/// One row of the record store: the object key and its transformed content.
/// Writes are upserts keyed by `id`, so reprocessing the same object
/// overwrites its record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessedRecord {
    pub id: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Acknowledgement returned to the platform for storage-triggered
/// invocations; never surfaced to an HTTP caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageAck {
    pub status: String,
    pub record_id: String,
}
