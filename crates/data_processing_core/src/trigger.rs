use serde::Deserialize;
use serde_json::Value;

use crate::contract::{InvocationKind, ProcessingRequest, SourceLocator};
use crate::error::PipelineError;

/// The two invocation shapes the handler accepts, classified before parsing
/// so each branch is handled exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationTrigger {
    StorageEvent(Value),
    HttpRequest(Value),
}

/// Expected JSON body for HTTP-triggered invocations.
#[derive(Debug, Clone, Deserialize)]
struct HttpProcessBody {
    bucket: String,
    key: String,
}

pub fn classify_trigger(event: Value) -> InvocationTrigger {
    if is_storage_event(&event) {
        InvocationTrigger::StorageEvent(event)
    } else {
        InvocationTrigger::HttpRequest(event)
    }
}

fn is_storage_event(event: &Value) -> bool {
    event
        .get("Records")
        .and_then(Value::as_array)
        .map(|records| {
            !records.is_empty()
                && records.iter().all(|record| {
                    record.get("s3").is_some()
                        || record
                            .get("eventSource")
                            .and_then(Value::as_str)
                            .map(|source| source == "aws:s3")
                            .unwrap_or(false)
                })
        })
        .unwrap_or(false)
}

/// Extracts the `(bucket, key)` pair from a classified trigger. Pure
/// parsing, no side effects.
pub fn parse_trigger(trigger: &InvocationTrigger) -> Result<ProcessingRequest, PipelineError> {
    match trigger {
        InvocationTrigger::StorageEvent(event) => parse_storage_event(event),
        InvocationTrigger::HttpRequest(event) => parse_http_request(event),
    }
}

fn parse_storage_event(event: &Value) -> Result<ProcessingRequest, PipelineError> {
    let records = event
        .get("Records")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("storage event must include a Records array"))?;

    // Each delivery carries at least one record; only the first is processed.
    let first = records
        .first()
        .ok_or_else(|| malformed("storage event Records array is empty"))?;

    let bucket = first
        .get("s3")
        .and_then(|element| element.get("bucket"))
        .and_then(|bucket| bucket.get("name"))
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("storage record is missing s3.bucket.name"))?;
    let key = first
        .get("s3")
        .and_then(|element| element.get("object"))
        .and_then(|object| object.get("key"))
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("storage record is missing s3.object.key"))?;

    Ok(ProcessingRequest {
        locator: SourceLocator {
            bucket: bucket.to_string(),
            key: key.to_string(),
        },
        kind: InvocationKind::StorageEvent,
    })
}

fn parse_http_request(event: &Value) -> Result<ProcessingRequest, PipelineError> {
    let payload = normalize_gateway_body(event)?;
    let body: HttpProcessBody = serde_json::from_value(payload)
        .map_err(|error| malformed(format!("request body must include bucket and key: {error}")))?;

    let bucket = body.bucket.trim();
    let key = body.key.trim();
    if bucket.is_empty() {
        return Err(malformed("bucket cannot be empty"));
    }
    if key.is_empty() {
        return Err(malformed("key cannot be empty"));
    }

    Ok(ProcessingRequest {
        locator: SourceLocator {
            bucket: bucket.to_string(),
            key: key.to_string(),
        },
        kind: InvocationKind::HttpRequest,
    })
}

fn normalize_gateway_body(event: &Value) -> Result<Value, PipelineError> {
    let Some(object) = event.as_object() else {
        return Err(malformed("request payload must be a JSON object"));
    };

    // Direct invocations carry the fields at the top level; gateway proxy
    // events wrap them in `body`, either raw or as a JSON-encoded string.
    let Some(body) = object.get("body") else {
        return Ok(event.clone());
    };

    match body {
        Value::Object(_) => Ok(body.clone()),
        Value::String(text) => serde_json::from_str(text)
            .map_err(|error| malformed(format!("malformed JSON body: {error}"))),
        Value::Null => Err(malformed("request body is required")),
        _ => Err(malformed("request body must be a JSON object")),
    }
}

fn malformed(message: impl Into<String>) -> PipelineError {
    PipelineError::MalformedTrigger(message.into())
}
