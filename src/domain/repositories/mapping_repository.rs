//! # Mapping Repository Trait
//!
//! URL対応表の永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::url_mapping::UrlMapping;

/// URL対応表リポジトリ
///
/// 全件読み込み・全件書き戻しのみ。ロックは取らないので、同時に2つの
/// 実行が同じファイルを書くと後から書いた方が勝つ
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// 対応表を読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - 対応表ファイルのパス
    ///
    /// # Returns
    ///
    /// 対応表。ファイルが存在しない場合は空の対応表
    ///
    /// # Errors
    ///
    /// ファイルの読み込みやJSONの解析に失敗した場合にエラーを返す
    async fn load(&self, path: &Path) -> Result<UrlMapping>;

    /// 対応表を保存する（既存ファイルは上書き）
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn save(&self, path: &Path, mapping: &UrlMapping) -> Result<()>;
}
