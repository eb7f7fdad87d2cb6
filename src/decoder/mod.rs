//! リクエストボディのデコーダー（差し替え可能なストラテジ）

pub mod chain;
pub mod json;

pub use chain::ChainDecoder;
pub use json::JsonDecoder;

use serde_json::{Map, Value};

use crate::error::DecodeError;

/// JSONフォーマットを表すタグ
pub const JSON_FORMAT: &str = "json";

/// ボディ文字列をキーと値のマッピングへデコードする
#[cfg_attr(test, mockall::automock)]
pub trait Decoder {
    /// `content`を`format`としてデコード
    fn decode(&self, content: &str, format: &str) -> Result<Map<String, Value>, DecodeError>;

    /// 指定フォーマットをデコードできるかどうか
    fn supports_decoding(&self, format: &str) -> bool;
}

impl<D: Decoder + ?Sized> Decoder for Box<D> {
    fn decode(&self, content: &str, format: &str) -> Result<Map<String, Value>, DecodeError> {
        (**self).decode(content, format)
    }

    fn supports_decoding(&self, format: &str) -> bool {
        (**self).supports_decoding(format)
    }
}

impl<D: Decoder + ?Sized> Decoder for std::sync::Arc<D> {
    fn decode(&self, content: &str, format: &str) -> Result<Map<String, Value>, DecodeError> {
        (**self).decode(content, format)
    }

    fn supports_decoding(&self, format: &str) -> bool {
        (**self).supports_decoding(format)
    }
}
