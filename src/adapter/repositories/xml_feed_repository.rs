//! XML Feed Repository Implementation
//!
//! FeedRepositoryのRSS(XML)ファイル実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::adapter::rss::render_feed;
use crate::domain::entities::feed::Feed;
use crate::domain::repositories::feed_repository::FeedRepository;

/// RSS ファイルを書き出すフィードリポジトリ
pub struct XmlFeedRepository;

impl XmlFeedRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    fn write_sync(path: &Path, xml: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create feed output directory")?;
        }

        fs::write(path, xml)
            .with_context(|| format!("Failed to write feed: {}", path.display()))?;

        info!("Wrote feed to {}", path.display());
        Ok(())
    }
}

#[async_trait]
impl FeedRepository for XmlFeedRepository {
    async fn write_feed(&self, path: &Path, feed: &Feed) -> Result<()> {
        let xml = render_feed(feed)?;
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::write_sync(&path, &xml))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for XmlFeedRepository {
    fn default() -> Self {
        Self::new()
    }
}
