use serde_json::{Map, Value};

use crate::error::DecodeError;
use super::{Decoder, JSON_FORMAT};

/// serde_jsonによるJSONデコーダー（キーの順序を保持）
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// 新しいJsonDecoderを作成
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for JsonDecoder {
    fn decode(&self, content: &str, format: &str) -> Result<Map<String, Value>, DecodeError> {
        if !self.supports_decoding(format) {
            return Err(DecodeError::UnsupportedFormat(format.to_string()));
        }

        let value: Value = serde_json::from_str(content)
            .map_err(|e| DecodeError::Syntax(e.to_string()))?;

        let kind = match value {
            Value::Object(map) => return Ok(map),
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
        };
        Err(DecodeError::NotAnObject(kind))
    }

    fn supports_decoding(&self, format: &str) -> bool {
        format == JSON_FORMAT
    }
}
