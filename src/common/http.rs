//! HTTP関連の基本型

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use super::params::ParameterBag;
use super::traits::FormRequest;

/// XMLHttpRequest判定に使うヘッダー名
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";

/// XMLHttpRequest判定に使うヘッダー値
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// HTTPメソッド
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Method {
    /// 文字列からMethodに変換
    pub fn from_str(method: &str) -> Option<Self> {
        match method.to_uppercase().as_str() {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "PATCH" => Some(Method::PATCH),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            _ => None,
        }
    }

    /// メソッド名を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::PATCH => "PATCH",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
        }
    }
}

/// HTTPリクエスト
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTPメソッド
    pub method: Method,
    /// HTTPヘッダー（小文字キー、値は受信順）
    pub headers: HashMap<String, Vec<String>>,
    /// リクエストボディ
    pub body: Option<Vec<u8>>,
    /// フォームパラメータ
    pub parameters: ParameterBag,
}

impl Request {
    /// 新しいリクエストを作成
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HashMap::new(),
            body: None,
            parameters: ParameterBag::new(),
        }
    }

    /// ヘッダーを追加（同名ヘッダーは値が追記される）
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key: String = key.into();
        self.headers
            .entry(key.to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// ボディを追加
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// フォームパラメータを追加
    pub fn with_parameter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parameters.set(key, value);
        self
    }

    /// ヘッダーの最初の値を取得
    ///
    /// `headers`へ直接挿入された大文字混じりのキーも名前の大小を無視して探す。
    pub fn header_first(&self, name: &str) -> Option<&str> {
        let values = match self.headers.get(&name.to_ascii_lowercase()) {
            Some(values) => Some(values),
            None => self
                .headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, values)| values),
        };
        values
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// フォームパラメータの不変参照を取得
    pub fn parameters(&self) -> &ParameterBag {
        &self.parameters
    }

    /// フォームパラメータの可変参照を取得
    pub fn parameters_mut(&mut self) -> &mut ParameterBag {
        &mut self.parameters
    }
}

impl FormRequest for Request {
    fn method(&self) -> String {
        self.method.as_str().to_string()
    }

    fn header(&self, name: &str, default: &str) -> String {
        self.header_first(name).unwrap_or(default).to_string()
    }

    fn is_xml_http_request(&self) -> bool {
        self.header_first(REQUESTED_WITH_HEADER) == Some(XML_HTTP_REQUEST)
    }

    fn content(&self) -> Vec<u8> {
        self.body.clone().unwrap_or_default()
    }

    fn set_parameter(&mut self, key: String, value: Value) {
        self.parameters.set(key, value);
    }
}

/// HTTPレスポンス
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTPステータスコード
    pub status: u16,
    /// HTTPヘッダー
    pub headers: HashMap<String, String>,
    /// レスポンスボディ
    pub body: Option<Vec<u8>>,
}

impl Response {
    /// 新しいレスポンスを作成
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// 200 OKレスポンスを作成
    pub fn ok() -> Self {
        Self::new(200)
    }

    /// ヘッダーを追加
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// ボディを追加
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Error型から固定メッセージのレスポンスを生成
    pub fn from_error(error: &crate::error::Error) -> Self {
        let status = error.status_code();
        let message = match status {
            400 => "Bad Request",
            500 => "Internal Server Error",
            _ => "Error",
        };
        Response::new(status)
            .with_header("Content-Type", "text/plain")
            .with_body(message.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, Error};
    use serde_json::json;

    #[test]
    fn test_method_from_str() {
        assert_eq!(Method::from_str("GET"), Some(Method::GET));
        assert_eq!(Method::from_str("get"), Some(Method::GET));
        assert_eq!(Method::from_str("POST"), Some(Method::POST));
        assert_eq!(Method::from_str("PATCH"), Some(Method::PATCH));
        assert_eq!(Method::from_str("INVALID"), None);
        assert_eq!(Method::POST.to_string(), "POST");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = Request::new(Method::POST)
            .with_header("Content-Type", "application/json");

        assert_eq!(req.header("content-type", ""), "application/json");
        assert_eq!(req.header("CONTENT-TYPE", ""), "application/json");
        assert_eq!(req.header("Accept", "fallback"), "fallback");
    }

    #[test]
    fn test_header_returns_first_value() {
        let req = Request::new(Method::POST)
            .with_header("Content-Type", "application/json")
            .with_header("content-type", "text/plain");

        assert_eq!(req.headers.get("content-type").map(Vec::len), Some(2));
        assert_eq!(req.header("Content-Type", ""), "application/json");
    }

    #[test]
    fn test_header_lookup_finds_mixed_case_stored_keys() {
        let mut req = Request::new(Method::POST);
        req.headers.insert("Content-Type".to_string(), vec!["application/json".to_string()]);
        req.headers.insert("X-Requested-With".to_string(), vec!["XMLHttpRequest".to_string()]);

        assert_eq!(req.header("Content-Type", ""), "application/json");
        assert_eq!(req.header("content-type", ""), "application/json");
        assert!(req.is_xml_http_request());
    }

    #[test]
    fn test_is_xml_http_request() {
        let req = Request::new(Method::POST);
        assert!(!req.is_xml_http_request());

        let req = req.with_header("X-Requested-With", "XMLHttpRequest");
        assert!(req.is_xml_http_request());

        let req = Request::new(Method::POST)
            .with_header("X-Requested-With", "xmlhttprequest");
        assert!(!req.is_xml_http_request());
    }

    #[test]
    fn test_content_and_parameters() {
        let mut req = Request::new(Method::POST);
        assert!(req.content().is_empty());

        req = req.with_body(b"{}".to_vec()).with_parameter("a", json!(1));
        assert_eq!(req.content(), b"{}".to_vec());

        req.set_parameter("a".to_string(), json!(2));
        assert_eq!(req.parameters().get("a"), Some(&json!(2)));
        assert_eq!(req.parameters_mut().remove("a"), Some(json!(2)));
        assert!(req.parameters().is_empty());
        assert_eq!(FormRequest::method(&req), "POST");
    }

    #[test]
    fn test_response_from_error() {
        let err = Error::from(DecodeError::Syntax("EOF".to_string()));
        let res = Response::from_error(&err);

        assert_eq!(res.status, 400);
        assert_eq!(res.headers.get("Content-Type"), Some(&"text/plain".to_string()));
        assert_eq!(res.body.as_ref().unwrap(), &b"Bad Request".to_vec());

        let res = Response::from_error(&Error::MiddlewareError("boom".to_string()));
        assert_eq!(res.status, 500);
    }
}
