use async_trait::async_trait;
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::common::{FormRequest, Middleware, Request, Response};
use crate::config::TransposerConfig;
use crate::decoder::{Decoder, JsonDecoder, JSON_FORMAT};
use crate::error::{DecodeError, Error};

use super::{JSON_CONTENT_TYPE, POST_METHOD};

/// JSONボディをフォームパラメータへ転記するリスナー
///
/// POSTかつ`Content-Type: application/json`（設定によってはXMLHttpRequestも）の
/// リクエストだけを対象に、ボディをデコードしてトップレベルのキーと値を
/// そのままフォームパラメータへ設定する。
pub struct JsonToFormDataTransposer<D = JsonDecoder> {
    decoder: D,
    config: TransposerConfig,
}

impl Default for JsonToFormDataTransposer<JsonDecoder> {
    fn default() -> Self {
        Self::new(JsonDecoder::new())
    }
}

impl<D: Decoder> JsonToFormDataTransposer<D> {
    /// デフォルト設定で作成
    pub fn new(decoder: D) -> Self {
        Self::with_config(decoder, TransposerConfig::default())
    }

    /// 設定を指定して作成
    pub fn with_config(decoder: D, config: TransposerConfig) -> Self {
        Self { decoder, config }
    }

    /// デコードエラーを呼び出し元へ返すかどうかを設定
    pub fn rethrow_decoder_exception(mut self, rethrow: bool) -> Self {
        self.config.rethrow_decoder_exception = rethrow;
        self
    }

    /// XMLHttpRequest判定を条件に含めるかどうかを設定
    pub fn check_is_xml_http_request(mut self, check: bool) -> Self {
        self.config.check_is_xml_http_request = check;
        self
    }

    /// 設定を取得
    pub fn config(&self) -> &TransposerConfig {
        &self.config
    }

    /// デコーダーを取得
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// 転記対象のリクエストかどうか判定
    ///
    /// 条件は全て評価してから判定する。XMLHttpRequest判定は
    /// 設定で無効化されている場合のみ呼び出さない。
    pub fn should_transpose<R: FormRequest + ?Sized>(&self, request: &R) -> bool {
        let mut conditions = vec![
            request.method() == POST_METHOD,
            request.header("Content-Type", "") == JSON_CONTENT_TYPE,
        ];
        if self.config.check_is_xml_http_request {
            conditions.push(request.is_xml_http_request());
        }

        conditions.iter().all(|matched| *matched)
    }

    /// 条件に合致すればボディをデコードしてフォームパラメータへ転記
    pub fn transpose_data<R: FormRequest + ?Sized>(&self, request: &mut R) -> Result<(), Error> {
        if !self.should_transpose(&*request) {
            debug!("Request does not qualify for JSON transposition, skipping");
            return Ok(());
        }

        let content = request.content();
        match self.decode_body(&content) {
            Ok(parameters) => {
                let count = merge_parameters(request, parameters);
                debug!("Transposed {} JSON field(s) into form parameters", count);
                Ok(())
            }
            Err(e) if self.config.rethrow_decoder_exception => Err(Error::Decode(e)),
            Err(e) => {
                warn!("Ignoring undecodable JSON request body: {}", e);
                Ok(())
            }
        }
    }

    fn decode_body(&self, content: &[u8]) -> Result<Map<String, Value>, DecodeError> {
        let content = std::str::from_utf8(content)
            .map_err(|e| DecodeError::InvalidEncoding(e.to_string()))?;
        self.decoder.decode(content, JSON_FORMAT)
    }
}

/// デコード済みのマッピングをフォームパラメータへ設定し、設定した件数を返す
pub fn merge_parameters<R: FormRequest + ?Sized>(
    request: &mut R,
    parameters: Map<String, Value>,
) -> usize {
    let count = parameters.len();
    for (key, value) in parameters {
        request.set_parameter(key, value);
    }
    count
}

#[async_trait]
impl<D> Middleware for JsonToFormDataTransposer<D>
where
    D: Decoder + Send + Sync,
{
    async fn pre_process(&self, mut req: Request) -> Result<Request, Error> {
        self.transpose_data(&mut req)?;
        Ok(req)
    }

    async fn post_process(&self, res: Response) -> Result<Response, Error> {
        Ok(res)
    }
}
