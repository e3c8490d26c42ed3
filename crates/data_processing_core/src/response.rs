use serde_json::{json, Value};

use crate::contract::{ApiGatewayResponse, ProcessedRecord, StorageAck, SUCCESS_MESSAGE};
use crate::error::PipelineError;

/// Maps the terminal pipeline outcome to an HTTP-shaped response for
/// gateway-triggered invocations.
pub fn http_response(outcome: &Result<ProcessedRecord, PipelineError>) -> ApiGatewayResponse {
    match outcome {
        Ok(_) => success_response(),
        Err(error) => error_response(error),
    }
}

/// Acknowledgement for storage-triggered invocations; storage failures are
/// not shaped here, they propagate to the platform failure channel.
pub fn storage_ack(record: &ProcessedRecord) -> StorageAck {
    StorageAck {
        status: "completed".to_string(),
        record_id: record.id.clone(),
    }
}

fn success_response() -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 200,
        headers: json!({"Content-Type": "application/json"}),
        body: Value::from(SUCCESS_MESSAGE).to_string(),
    }
}

fn error_response(error: &PipelineError) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: error.http_status(),
        headers: json!({"Content-Type": "application/json"}),
        body: json!({
            "error": error.error_code(),
            "message": error.to_string(),
        })
        .to_string(),
    }
}
