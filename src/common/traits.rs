//! コアトレイト定義（FormRequest、Middleware）

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;
use super::http::{Request, Response};

/// トランスポーザーが必要とするリクエスト操作の集合
///
/// ホスト側のWebレイヤーはこのトレイトを実装するだけで
/// `JsonToFormDataTransposer` を利用できる。
#[cfg_attr(test, mockall::automock)]
pub trait FormRequest {
    /// HTTPメソッド文字列を取得
    fn method(&self) -> String;

    /// ヘッダーの最初の値を取得（存在しない場合は`default`）
    fn header(&self, name: &str, default: &str) -> String;

    /// XMLHttpRequestによるリクエストかどうか判定
    fn is_xml_http_request(&self) -> bool;

    /// バッファ済みのボディ全体を読み込む（ボディなしは空）
    fn content(&self) -> Vec<u8>;

    /// フォームパラメータを設定（既存の値は上書き）
    fn set_parameter(&mut self, key: String, value: Value);
}

/// ミドルウェアの特性
#[async_trait]
pub trait Middleware: Send + Sync {
    /// リクエスト前の処理
    async fn pre_process(&self, req: Request) -> Result<Request, Error>;

    /// レスポンス後の処理
    async fn post_process(&self, res: Response) -> Result<Response, Error>;
}
