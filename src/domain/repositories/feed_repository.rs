//! # Feed Repository Trait
//!
//! フィード文書の出力を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::feed::Feed;

/// フィードリポジトリ
#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// フィードを書き出す（既存ファイルは上書き）
    async fn write_feed(&self, path: &Path, feed: &Feed) -> Result<()>;
}
