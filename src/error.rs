//! エラー型の定義

use thiserror::Error;

/// デコーダーが返すエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// JSONとして不正な入力
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// トップレベルがオブジェクトではない
    #[error("Decoded content is not an object, got {0}")]
    NotAnObject(&'static str),

    /// UTF-8として読めないボディ
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// 未対応のフォーマット指定
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// アプリケーションのエラー型
#[derive(Error, Debug)]
pub enum Error {
    /// リクエストボディのデコードエラー
    #[error("Failed to decode request body: {0}")]
    Decode(#[from] DecodeError),

    /// ミドルウェアエラー
    #[error("Middleware error: {0}")]
    MiddlewareError(String),

    /// 設定エラー
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl Error {
    /// エラーからHTTPステータスコードを取得
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Decode(_) => 400,
            Error::MiddlewareError(_) => 500,
            Error::ConfigurationError(_) => 500,
        }
    }

    /// デコードエラーかどうか判定
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}
