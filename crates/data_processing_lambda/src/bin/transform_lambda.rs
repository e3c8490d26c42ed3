use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::operation::get_object::GetObjectError;
use data_processing_lambda::adapters::object_store::{ObjectFetchError, SourceObjectStore};
use data_processing_lambda::adapters::record_store::{RecordSink, RecordWriteError};
use data_processing_lambda::handlers::pipeline::handle_trigger_event;
use data_processing_lambda::runtime::contract::ProcessedRecord;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

const DEFAULT_TABLE_NAME: &str = "processed-data";

struct S3SourceObjectStore {
    s3_client: aws_sdk_s3::Client,
}

impl SourceObjectStore for S3SourceObjectStore {
    fn fetch_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ObjectFetchError> {
        let bucket = bucket.to_string();
        let object_key = key.to_string();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .get_object()
                    .bucket(bucket)
                    .key(object_key.clone())
                    .send()
                    .await
                    .map_err(|error| {
                        let message = format!("failed to read object from s3: {error}");
                        let service_error = error.into_service_error();
                        if matches!(service_error, GetObjectError::NoSuchKey(_)) {
                            ObjectFetchError::NotFound(object_key.clone())
                        } else if service_error.code() == Some("AccessDenied") {
                            ObjectFetchError::AccessDenied(message)
                        } else {
                            ObjectFetchError::Transient(message)
                        }
                    })?;

                output
                    .body
                    .collect()
                    .await
                    .map(|bytes| bytes.to_vec())
                    .map_err(|error| {
                        ObjectFetchError::Transient(format!(
                            "failed to read s3 object body: {error}"
                        ))
                    })
            })
        })
    }
}

struct DynamoRecordSink {
    table_name: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
}

impl RecordSink for DynamoRecordSink {
    fn put_record(&self, record: &ProcessedRecord) -> Result<(), RecordWriteError> {
        let table_name = self.table_name.clone();
        let record_id = record.id.clone();
        let record_data = record.data.clone();
        let client = self.dynamodb_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .item("id", AttributeValue::S(record_id))
                    .item("data", AttributeValue::S(record_data))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| {
                        let message = format!("failed to write record to dynamodb: {error}");
                        if error.into_service_error().code() == Some("AccessDeniedException") {
                            RecordWriteError::AccessDenied(message)
                        } else {
                            RecordWriteError::Transient(message)
                        }
                    })
            })
        })
    }
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let table_name =
        std::env::var("PROCESSED_TABLE_NAME").unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string());

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let object_store = S3SourceObjectStore {
        s3_client: aws_sdk_s3::Client::new(&aws_config),
    };
    let record_sink = DynamoRecordSink {
        table_name,
        dynamodb_client: aws_sdk_dynamodb::Client::new(&aws_config),
    };

    handle_trigger_event(event.payload, &object_store, &record_sink)
        .map_err(|error| Error::from(error.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
