use std::fmt;

use anyhow::Error;
use serde::Serialize;
use serde_json::{json, Value};

pub const PROMPT_BLOCKED: &str = "PROMPT_BLOCKED";
pub const EMPTY_PROMPT: &str = "EMPTY_PROMPT";
pub const INPUT_UNREADABLE: &str = "INPUT_UNREADABLE";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodedErrorKind {
    Usage,
    Io,
}

impl CodedErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            CodedErrorKind::Usage => 2,
            CodedErrorKind::Io => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CodedError {
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
    pub kind: CodedErrorKind,
}

impl CodedError {
    pub fn usage(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            kind: CodedErrorKind::Usage,
        }
    }

    pub fn io(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            kind: CodedErrorKind::Io,
        }
    }

    pub fn prompt_blocked(phrase: &str) -> Self {
        Self::usage(PROMPT_BLOCKED, "prompt not allowed")
            .with_details(json!({ "matched_phrase": phrase }))
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            ok: false,
            error: ErrorEnvelopeBody {
                code: self.code.to_owned(),
                message: self.message.clone(),
                details: self.details.clone(),
            },
        }
    }
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CodedError {}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub ok: bool,
    pub error: ErrorEnvelopeBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelopeBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

pub fn find_coded_error(error: &Error) -> Option<&CodedError> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CodedError>())
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::{find_coded_error, CodedError, CodedErrorKind, PROMPT_BLOCKED};

    #[test]
    fn coded_error_survives_context_wrapping() {
        let result: anyhow::Result<()> =
            Err(CodedError::prompt_blocked("reveal api key").into());
        let error = result.context("guard failed").unwrap_err();
        let coded = find_coded_error(&error).expect("coded error should be in chain");
        assert_eq!(coded.code, PROMPT_BLOCKED);
        assert_eq!(coded.kind, CodedErrorKind::Usage);
    }

    #[test]
    fn envelope_omits_missing_details() {
        let envelope = CodedError::usage("EMPTY_PROMPT", "prompt is empty").envelope();
        let value = serde_json::to_value(&envelope).expect("envelope should serialize");
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["code"], "EMPTY_PROMPT");
        assert!(value["error"].get("details").is_none());
    }
}
