//! フォームパラメータストアの実装

use serde_json::{Map, Value};

/// フォームパラメータストア（挿入順を保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterBag {
    parameters: Map<String, Value>,
}

impl ParameterBag {
    /// 新しいParameterBagを作成
    pub fn new() -> Self {
        Self {
            parameters: Map::new(),
        }
    }

    /// 値を設定（既存キーは位置を保ったまま上書き）
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.parameters.insert(key.into(), value);
    }

    /// 値を取得
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// 指定されたキーが存在するかチェック
    pub fn has(&self, key: &str) -> bool {
        self.parameters.contains_key(key)
    }

    /// 値を削除して返却
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        // swap_removeだと順序が崩れる
        self.parameters.shift_remove(key)
    }

    /// 全てのキーを取得
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.parameters.keys()
    }

    /// 全てのパラメータを取得
    pub fn all(&self) -> &Map<String, Value> {
        &self.parameters
    }

    /// 複数のパラメータを一括で上書き追加
    pub fn add(&mut self, parameters: Map<String, Value>) {
        for (key, value) in parameters {
            self.parameters.insert(key, value);
        }
    }

    /// 全パラメータを置き換え
    pub fn replace(&mut self, parameters: Map<String, Value>) {
        self.parameters = parameters;
    }

    /// パラメータ数
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// 内部のマップを取り出す
    pub fn into_inner(self) -> Map<String, Value> {
        self.parameters
    }
}

impl From<Map<String, Value>> for ParameterBag {
    fn from(parameters: Map<String, Value>) -> Self {
        Self { parameters }
    }
}
