use thiserror::Error;

/// Terminal failure kinds for one pipeline invocation. None of these are
/// retried internally; redelivery is the trigger source's concern.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("malformed trigger payload: {0}")]
    MalformedTrigger(String),
    #[error("source object not found: {0}")]
    SourceNotFound(String),
    #[error("source object unavailable: {0}")]
    SourceAccess(String),
    #[error("source content is not valid UTF-8: {0}")]
    Decode(String),
    #[error("record write failed: {0}")]
    SinkWrite(String),
    #[error("invocation exceeded the platform time limit")]
    Timeout,
}

impl PipelineError {
    /// Status code for HTTP-triggered invocations. `Timeout` is mapped for
    /// completeness; the pipeline never synthesizes it, the platform does.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::MalformedTrigger(_) | Self::Decode(_) => 400,
            Self::SourceNotFound(_) => 404,
            Self::SourceAccess(_) | Self::SinkWrite(_) => 502,
            Self::Timeout => 504,
        }
    }

    /// Stable machine-readable code used in error response bodies and logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedTrigger(_) => "malformed_trigger",
            Self::SourceNotFound(_) => "source_not_found",
            Self::SourceAccess(_) => "source_access_failed",
            Self::Decode(_) => "invalid_source_encoding",
            Self::SinkWrite(_) => "record_write_failed",
            Self::Timeout => "timeout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_error_kind_to_its_status() {
        assert_eq!(
            PipelineError::MalformedTrigger("bad".to_string()).http_status(),
            400
        );
        assert_eq!(
            PipelineError::Decode("bad bytes".to_string()).http_status(),
            400
        );
        assert_eq!(
            PipelineError::SourceNotFound("missing.txt".to_string()).http_status(),
            404
        );
        assert_eq!(
            PipelineError::SourceAccess("denied".to_string()).http_status(),
            502
        );
        assert_eq!(
            PipelineError::SinkWrite("throttled".to_string()).http_status(),
            502
        );
        assert_eq!(PipelineError::Timeout.http_status(), 504);
    }

    #[test]
    fn error_codes_are_distinct() {
        let codes = [
            PipelineError::MalformedTrigger(String::new()).error_code(),
            PipelineError::SourceNotFound(String::new()).error_code(),
            PipelineError::SourceAccess(String::new()).error_code(),
            PipelineError::Decode(String::new()).error_code(),
            PipelineError::SinkWrite(String::new()).error_code(),
            PipelineError::Timeout.error_code(),
        ];
        for (index, code) in codes.iter().enumerate() {
            assert!(!codes[index + 1..].contains(code), "duplicate code {code}");
        }
    }
}
