//! # Storage Repository Trait
//!
//! リモートストレージ（Google Drive）操作を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::remote_file::RemoteFile;

/// リモートストレージリポジトリ
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// フォルダ内の音声ファイルをすべて列挙する（ページングは実装側で辿る）
    async fn list_audio_files(&self, folder_id: &str) -> Result<Vec<RemoteFile>>;

    /// ローカルファイルをフォルダにアップロードする
    async fn upload_file(&self, path: &Path, folder_id: &str) -> Result<RemoteFile>;

    /// 誰でも読めるように公開する
    async fn share_publicly(&self, file_id: &str) -> Result<()>;
}
