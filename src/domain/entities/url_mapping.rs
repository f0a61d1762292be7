//! # UrlMapping Entity
//!
//! ファイル名 → ダウンロードURL の対応表
//!
//! feed と sync の両方が読み書きする唯一の永続状態。1回の実行につき
//! 読み込み1回・書き込み1回で、ロックはしない（後から書いた方が勝つ）。
//! ローカルから消えたファイルのエントリも削除しない。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ファイル名 → URL の対応表
///
/// キー順に保持するので、変更が無ければ保存結果は毎回同じバイト列になる
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UrlMapping {
    entries: BTreeMap<String, String>,
}

impl UrlMapping {
    /// 空の対応表を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル名に対応するURLを返す
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.entries.get(filename).map(String::as_str)
    }

    /// ファイル名が登録済みかどうか
    pub fn contains(&self, filename: &str) -> bool {
        self.entries.contains_key(filename)
    }

    /// URLを登録（既存の値は上書き）
    pub fn insert(&mut self, filename: impl Into<String>, url: impl Into<String>) -> Option<String> {
        self.entries.insert(filename.into(), url.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mapping_is_empty() {
        let mapping = UrlMapping::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.len(), 0);
        assert!(mapping.get("a.mp3").is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let mut mapping = UrlMapping::new();
        assert!(mapping.insert("a.mp3", "https://example.com/a").is_none());

        assert!(mapping.contains("a.mp3"));
        assert_eq!(mapping.get("a.mp3"), Some("https://example.com/a"));

        let previous = mapping.insert("a.mp3", "https://example.com/a2");
        assert_eq!(previous.as_deref(), Some("https://example.com/a"));
        assert_eq!(mapping.get("a.mp3"), Some("https://example.com/a2"));
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_serializes_as_flat_object_in_key_order() {
        let mut mapping = UrlMapping::new();
        mapping.insert("b.mp3", "https://example.com/b");
        mapping.insert("a.mp3", "https://example.com/a");

        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(
            json,
            r#"{"a.mp3":"https://example.com/a","b.mp3":"https://example.com/b"}"#
        );
    }

    #[test]
    fn test_deserializes_flat_object() {
        let mapping: UrlMapping =
            serde_json::from_str(r#"{"x.mp3": "https://example.com/x"}"#).unwrap();
        assert_eq!(mapping.get("x.mp3"), Some("https://example.com/x"));
    }
}
