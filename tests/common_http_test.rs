// src/common のリクエストモデルを公開APIから確認するテスト
use json_form_transposer::common::{FormRequest, Method, ParameterBag, Request, Response};
use json_form_transposer::error::{DecodeError, Error};
use serde_json::json;

#[test]
fn test_request_builder() {
    let req = Request::new(Method::POST)
        .with_header("Content-Type", "application/json")
        .with_body(b"test body".to_vec());

    assert_eq!(req.method, Method::POST);
    // Requestヘッダーは小文字キーで保持される
    assert_eq!(req.headers.get("content-type"), Some(&vec!["application/json".to_string()]));
    assert_eq!(req.body.as_ref().unwrap(), &b"test body".to_vec());
}

#[test]
fn test_form_request_view_of_request() {
    let req = Request::new(Method::PATCH)
        .with_header("x-requested-with", "XMLHttpRequest");

    assert_eq!(req.method(), "PATCH");
    assert_eq!(req.header("Content-Type", ""), "");
    assert!(req.is_xml_http_request());
    assert!(req.content().is_empty());
}

#[test]
fn test_parameter_bag_from_map() {
    let mut map = serde_json::Map::new();
    map.insert("b".to_string(), json!(2));
    map.insert("a".to_string(), json!(1));

    let bag = ParameterBag::from(map);
    let keys: Vec<&String> = bag.keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(bag.all().len(), 2);
}

#[test]
fn test_from_error_decode() {
    let err = Error::Decode(DecodeError::Syntax("EOF".to_string()));
    let res = Response::from_error(&err);
    assert_eq!(res.status, 400);
    let body = String::from_utf8(res.body.unwrap()).unwrap();
    assert_eq!(body, "Bad Request");
}

#[test]
fn test_from_error_configuration() {
    let err = Error::ConfigurationError("bad".to_string());
    let res = Response::from_error(&err);
    assert_eq!(res.status, 500);
    assert_eq!(res.headers.get("Content-Type"), Some(&"text/plain".to_string()));
}
