//! ffprobe Output Models
//!
//! `ffprobe -print_format json -show_format` の出力

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub format: ProbeFormat,
}

/// コンテナレベルの情報
///
/// ffprobe は数値も文字列で出力する（例: `"duration": "3725.120000"`）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeFormat {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl ProbeFormat {
    /// タグを取得する（完全一致を優先し、無ければ大文字小文字を区別せずに探す）
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .or_else(|| {
                self.tags
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(key))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }
}
