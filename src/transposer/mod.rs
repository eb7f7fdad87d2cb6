//! JSONボディからフォームパラメータへの転記

pub mod core;

pub use self::core::{merge_parameters, JsonToFormDataTransposer};


/// 転記対象のContent-Type（完全一致のみ、charset付きは対象外）
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// 転記対象のHTTPメソッド
pub const POST_METHOD: &str = "POST";
