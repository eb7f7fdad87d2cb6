use log::debug;
use serde_json::{Map, Value};

use crate::error::DecodeError;
use super::Decoder;

/// 複数のデコーダーを順に試し、最初に対応したものへ委譲する
#[derive(Default)]
pub struct ChainDecoder {
    decoders: Vec<Box<dyn Decoder + Send + Sync>>,
}

impl ChainDecoder {
    /// 新しいChainDecoderを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// デコーダーを追加
    pub fn decoder<D>(mut self, decoder: D) -> Self
    where
        D: Decoder + Send + Sync + 'static,
    {
        self.decoders.push(Box::new(decoder));
        self
    }

    fn find(&self, format: &str) -> Option<&(dyn Decoder + Send + Sync)> {
        self.decoders
            .iter()
            .map(|decoder| &**decoder)
            .find(|decoder| decoder.supports_decoding(format))
    }
}

impl Decoder for ChainDecoder {
    fn decode(&self, content: &str, format: &str) -> Result<Map<String, Value>, DecodeError> {
        match self.find(format) {
            Some(decoder) => decoder.decode(content, format),
            None => {
                debug!("No decoder registered for format '{}'", format);
                Err(DecodeError::UnsupportedFormat(format.to_string()))
            }
        }
    }

    fn supports_decoding(&self, format: &str) -> bool {
        self.find(format).is_some()
    }
}
