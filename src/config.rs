//! トランスポーザーの設定

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// デコードエラーを呼び出し元へ返すかどうかの環境変数
pub const RETHROW_DECODER_EXCEPTION_ENV: &str = "TRANSPOSER_RETHROW_DECODER_EXCEPTION";

/// XMLHttpRequest判定を行うかどうかの環境変数
pub const CHECK_XML_HTTP_REQUEST_ENV: &str = "TRANSPOSER_CHECK_XML_HTTP_REQUEST";

/// トランスポーザーの設定（構築後は不変）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransposerConfig {
    /// trueならデコードエラーを返し、falseなら握りつぶす
    pub rethrow_decoder_exception: bool,
    /// trueならXMLHttpRequestであることも条件に含める
    pub check_is_xml_http_request: bool,
}

impl Default for TransposerConfig {
    fn default() -> Self {
        Self {
            rethrow_decoder_exception: true,
            check_is_xml_http_request: true,
        }
    }
}

impl TransposerConfig {
    /// 環境変数から設定を読み込む
    /// 未設定の項目はデフォルト値を使用する
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Self::default();
        Ok(Self {
            rethrow_decoder_exception: read_bool_env(
                RETHROW_DECODER_EXCEPTION_ENV,
                defaults.rethrow_decoder_exception,
            )?,
            check_is_xml_http_request: read_bool_env(
                CHECK_XML_HTTP_REQUEST_ENV,
                defaults.check_is_xml_http_request,
            )?,
        })
    }
}

fn read_bool_env(key: &str, default: bool) -> Result<bool, Error> {
    match env::var(key) {
        Ok(raw) => parse_bool(&raw).ok_or_else(|| {
            Error::ConfigurationError(format!("{} must be a boolean, got '{}'", key, raw))
        }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(_)) => Err(Error::ConfigurationError(format!(
            "{} is not valid unicode",
            key
        ))),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
