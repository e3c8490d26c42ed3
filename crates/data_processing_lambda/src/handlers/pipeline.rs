use std::time::Instant;

use serde_json::{json, Value};

use crate::adapters::object_store::{ObjectFetchError, SourceObjectStore};
use crate::adapters::record_store::{RecordSink, RecordWriteError};
use crate::runtime::contract::{ProcessedRecord, ProcessingRequest};
use crate::runtime::error::PipelineError;
use crate::runtime::response::{http_response, storage_ack};
use crate::runtime::transform::{build_record, decode_source, transform_text};
use crate::runtime::trigger::{classify_trigger, parse_trigger, InvocationTrigger};

/// Single typed entry point for both invocation shapes. HTTP-triggered
/// invocations always produce a gateway response value, including on
/// failure; storage-triggered invocations return an acknowledgement on
/// success and propagate errors so the platform failure channel sees them.
pub fn handle_trigger_event(
    event: Value,
    object_store: &impl SourceObjectStore,
    record_sink: &impl RecordSink,
) -> Result<Value, PipelineError> {
    let trigger = classify_trigger(event);
    match &trigger {
        InvocationTrigger::HttpRequest(_) => {
            let outcome = parse_trigger(&trigger)
                .and_then(|request| run_pipeline(&request, object_store, record_sink));
            let response = http_response(&outcome);
            Ok(serde_json::to_value(response).expect("gateway response should serialize"))
        }
        InvocationTrigger::StorageEvent(_) => {
            let request = parse_trigger(&trigger)?;
            let record = run_pipeline(&request, object_store, record_sink)?;
            Ok(serde_json::to_value(storage_ack(&record)).expect("storage ack should serialize"))
        }
    }
}

/// Runs one invocation to completion: fetch, decode, uppercase, upsert.
/// The sink is only reached after the transform fully succeeds, so a failed
/// fetch or decode never leaves a partial record behind.
pub fn run_pipeline(
    request: &ProcessingRequest,
    object_store: &impl SourceObjectStore,
    record_sink: &impl RecordSink,
) -> Result<ProcessedRecord, PipelineError> {
    let started_at = Instant::now();
    log_pipeline_info(
        "processing_started",
        json!({
            "bucket": request.locator.bucket.clone(),
            "key": request.locator.key.clone(),
            "trigger": request.kind.as_str(),
        }),
    );

    let result = fetch_transform_store(request, object_store, record_sink);
    match &result {
        Ok(record) => log_pipeline_info(
            "processing_completed",
            json!({
                "record_id": record.id.clone(),
                "bytes_out": record.data.len(),
                "duration_ms": started_at.elapsed().as_millis(),
            }),
        ),
        Err(error) => log_pipeline_error(
            "processing_failed",
            json!({
                "bucket": request.locator.bucket.clone(),
                "key": request.locator.key.clone(),
                "error_code": error.error_code(),
                "error": error.to_string(),
                "duration_ms": started_at.elapsed().as_millis(),
            }),
        ),
    }
    result
}

fn fetch_transform_store(
    request: &ProcessingRequest,
    object_store: &impl SourceObjectStore,
    record_sink: &impl RecordSink,
) -> Result<ProcessedRecord, PipelineError> {
    let bytes = object_store
        .fetch_object(&request.locator.bucket, &request.locator.key)
        .map_err(|error| match error {
            ObjectFetchError::NotFound(message) => PipelineError::SourceNotFound(message),
            ObjectFetchError::AccessDenied(message) | ObjectFetchError::Transient(message) => {
                PipelineError::SourceAccess(message)
            }
        })?;

    let text = decode_source(&request.locator, bytes)?;
    let record = build_record(&request.locator, transform_text(&text));

    record_sink.put_record(&record).map_err(|error| match error {
        RecordWriteError::AccessDenied(message) | RecordWriteError::Transient(message) => {
            PipelineError::SinkWrite(message)
        }
    })?;

    Ok(record)
}

fn log_pipeline_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "transform_pipeline",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_pipeline_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "transform_pipeline",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
