//! json-form-transposer: JSONリクエストボディをフォームパラメータへ転記するミドルウェア
//!
//! `POST` かつ `Content-Type: application/json` のリクエストボディをデコードし、
//! トップレベルのキーと値をフォームパラメータとして設定する。
//! 以降のフォーム処理はJSONボディを通常のフォーム送信と同様に扱える。
//!
//! ```
//! use json_form_transposer::{FormRequest, JsonToFormDataTransposer, Method, Request};
//!
//! let transposer = JsonToFormDataTransposer::default();
//! let mut req = Request::new(Method::POST)
//!     .with_header("Content-Type", "application/json")
//!     .with_header("X-Requested-With", "XMLHttpRequest")
//!     .with_body(br#"{"state": "done"}"#.to_vec());
//!
//! transposer.transpose_data(&mut req).unwrap();
//! assert_eq!(req.parameters().get("state"), Some(&serde_json::json!("done")));
//! assert!(req.is_xml_http_request());
//! ```

pub mod common;
pub mod config;
pub mod decoder;
pub mod error;
pub mod transposer;

pub use common::*;
pub use config::TransposerConfig;
pub use decoder::{ChainDecoder, Decoder, JsonDecoder};
pub use error::*;
pub use transposer::{merge_parameters, JsonToFormDataTransposer};
