use crate::contract::{ProcessedRecord, SourceLocator};
use crate::error::PipelineError;

/// Decodes fetched object bytes as UTF-8 text.
pub fn decode_source(locator: &SourceLocator, bytes: Vec<u8>) -> Result<String, PipelineError> {
    String::from_utf8(bytes).map_err(|error| {
        PipelineError::Decode(format!(
            "object '{}' is not valid UTF-8: {error}",
            locator.key
        ))
    })
}

/// The documented business rule: uppercase the full text. Pure and total;
/// Unicode-aware via `str::to_uppercase`.
pub fn transform_text(text: &str) -> String {
    text.to_uppercase()
}

pub fn build_record(locator: &SourceLocator, transformed: String) -> ProcessedRecord {
    ProcessedRecord {
        id: locator.key.clone(),
        data: transformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> SourceLocator {
        SourceLocator {
            bucket: "my-data-bucket".to_string(),
            key: "orders/42.txt".to_string(),
        }
    }

    #[test]
    fn uppercases_ascii_text() {
        assert_eq!(transform_text("hello world"), "HELLO WORLD");
    }

    #[test]
    fn uppercases_unicode_text() {
        assert_eq!(transform_text("straße größe"), "STRASSE GRÖSSE");
        assert_eq!(transform_text("καλημέρα"), "ΚΑΛΗΜΈΡΑ");
    }

    #[test]
    fn uppercase_input_is_a_fixed_point() {
        let text = "ALREADY UPPER 123 !?";
        assert_eq!(transform_text(text), text);
        assert_eq!(transform_text(&transform_text("mixed Case")), "MIXED CASE");
    }

    #[test]
    fn decodes_valid_utf8_bytes() {
        let text = decode_source(&locator(), "hello world".as_bytes().to_vec())
            .expect("valid utf-8 should decode");
        assert_eq!(text, "hello world");
    }

    #[test]
    fn rejects_invalid_utf8_bytes() {
        let error = decode_source(&locator(), vec![0xff, 0xfe, 0x61])
            .expect_err("invalid utf-8 should fail");
        assert!(matches!(error, PipelineError::Decode(_)));
        assert!(error.to_string().contains("orders/42.txt"));
    }

    #[test]
    fn record_is_keyed_by_object_key() {
        let record = build_record(&locator(), "HELLO WORLD".to_string());
        assert_eq!(record.id, "orders/42.txt");
        assert_eq!(record.data, "HELLO WORLD");
    }
}
