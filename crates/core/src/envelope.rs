// crates/core/src/envelope.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform wrapper for every gateway operation. `data` is set only when the
/// LLM text parsed as JSON; `raw_text` keeps the unparseable original for
/// diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponseEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl LlmResponseEnvelope {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            raw_text: None,
        }
    }

    pub fn invalid_json(raw_text: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some("LLM did not return valid JSON".to_string()),
            raw_text: Some(raw_text.into()),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            raw_text: None,
        }
    }
}
