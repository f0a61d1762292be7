//! # URL Resolver
//!
//! ファイル名から公開URLを決める

use crate::domain::entities::url_mapping::UrlMapping;

/// URL解決サービス
///
/// 対応表にあればその値、無ければ固定のベースURLにファイル名を連結する。
/// ネットワークには触れず、連結したURLが実在するかも確認しない
#[derive(Debug, Clone)]
pub struct UrlResolver {
    base_url: String,
}

impl UrlResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// ファイル名のURLを返す
    pub fn resolve(&self, filename: &str, mapping: &UrlMapping) -> String {
        match mapping.get(filename) {
            Some(url) => url.to_string(),
            None => self.fallback_url(filename),
        }
    }

    /// 対応表に無い場合のURL
    pub fn fallback_url(&self, filename: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), filename)
    }
}
