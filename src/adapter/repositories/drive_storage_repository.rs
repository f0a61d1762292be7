//! Google Drive Storage Repository Implementation
//!
//! StorageRepositoryのGoogle Drive実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use std::path::Path;
use std::sync::Arc;

use crate::adapter::drive::client::DriveApi;
use crate::adapter::drive::models::{
    audio_folder_query, direct_download_url, DriveFile, FileMetadata, Permission,
};
use crate::domain::entities::remote_file::RemoteFile;
use crate::domain::repositories::storage_repository::StorageRepository;

/// Google Drive ストレージリポジトリ
pub struct DriveStorageRepository {
    client: Arc<dyn DriveApi>,
    /// アップロード時に付け、一覧で絞り込む MIME タイプ
    mime_type: String,
}

impl DriveStorageRepository {
    /// 新しいリポジトリを作成
    pub fn new(client: Arc<dyn DriveApi>, mime_type: impl Into<String>) -> Self {
        Self {
            client,
            mime_type: mime_type.into(),
        }
    }

    fn to_remote_file(file: DriveFile) -> RemoteFile {
        RemoteFile {
            download_url: direct_download_url(&file.id),
            id: file.id,
            name: file.name,
        }
    }

    /// nextPageToken が無くなるまで files.list を繰り返す（同期処理）
    fn list_all_sync(
        client: &dyn DriveApi,
        folder_id: &str,
        mime_type: &str,
    ) -> Result<Vec<RemoteFile>> {
        let query = audio_folder_query(folder_id, mime_type);
        let mut files = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = client.list_files(&query, page_token.take())?;
            debug!("Listed {} files on this page", page.files.len());

            files.extend(page.files.into_iter().map(Self::to_remote_file));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(files)
    }
}

#[async_trait]
impl StorageRepository for DriveStorageRepository {
    async fn list_audio_files(&self, folder_id: &str) -> Result<Vec<RemoteFile>> {
        let client = self.client.clone();
        let folder_id = folder_id.to_string();
        let mime_type = self.mime_type.clone();
        tokio::task::spawn_blocking(move || {
            Self::list_all_sync(client.as_ref(), &folder_id, &mime_type)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn upload_file(&self, path: &Path, folder_id: &str) -> Result<RemoteFile> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .with_context(|| format!("Not a file path: {}", path.display()))?;
        let metadata = FileMetadata::audio(name, folder_id, self.mime_type.as_str());

        let client = self.client.clone();
        let path = path.to_path_buf();
        let uploaded = tokio::task::spawn_blocking(move || client.upload_file(&path, &metadata))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(Self::to_remote_file(uploaded))
    }

    async fn share_publicly(&self, file_id: &str) -> Result<()> {
        let client = self.client.clone();
        let file_id = file_id.to_string();
        tokio::task::spawn_blocking(move || {
            client.create_permission(&file_id, &Permission::anyone_reader())
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}
