//! # Sync Audio Use Case
//!
//! Google Drive 同期ユースケース
//!
//! 1. リモートフォルダの音声ファイルを列挙
//! 2. 保存済みの URL 対応表を読み込む
//! 3. ローカルの音声ファイルごとに
//!    - リモートに同名ファイルがある → リモートのURLで対応表を更新
//!    - 対応表に登録済み → そのまま
//!    - どちらでもない → アップロードして公開し、URLを登録
//! 4. 対応表を書き戻す
//!
//! リモートと対応表の値が食い違っていてもリモートを優先し、それ以上の突き合わせはしない。

use anyhow::Result;
use log::{info, warn};
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dto::sync_config::SyncConfig;
use crate::application::use_cases::discover_audio::DiscoverAudioUseCase;
use crate::domain::entities::audio_file::AudioFile;
use crate::domain::entities::remote_file::RemoteFile;
use crate::domain::repositories::audio_repository::AudioRepository;
use crate::domain::repositories::mapping_repository::MappingRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::services::exclusion_filter::ExclusionFilter;

/// ファイルごとの同期結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// リモートに同名ファイルがあった
    OnRemote { url: String },
    /// 対応表に登録済みだった
    AlreadyMapped,
    /// アップロードして公開した
    Uploaded { url: String },
    /// dry-run のためアップロードしなかった
    WouldUpload,
    /// アップロードまたは公開に失敗した
    Failed { error: String },
}

/// 同期結果のサマリー
#[derive(Debug, Clone)]
pub struct SyncSummary {
    /// リモートフォルダにあったファイル数
    pub remote_count: usize,
    /// ローカルファイルごとの結果（処理順）
    pub outcomes: Vec<(String, SyncOutcome)>,
    /// 同期後の対応表のエントリ数
    pub total_mapped: usize,
    /// 対応表を保存したかどうか（dry-run では false）
    pub saved: bool,
}

impl SyncSummary {
    /// 新しくアップロードした数
    pub fn uploaded_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, SyncOutcome::Uploaded { .. }))
    }

    /// 失敗した数
    pub fn failed_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, SyncOutcome::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&SyncOutcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| predicate(outcome))
            .count()
    }
}

/// Google Drive 同期ユースケース
pub struct SyncAudioUseCase<A, U, S>
where
    A: AudioRepository,
    U: MappingRepository,
    S: StorageRepository,
{
    discover_use_case: DiscoverAudioUseCase<A>,
    mapping_repository: Arc<U>,
    storage_repository: Arc<S>,
}

impl<A, U, S> SyncAudioUseCase<A, U, S>
where
    A: AudioRepository,
    U: MappingRepository,
    S: StorageRepository,
{
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `audio_repository` - 音声ファイルリポジトリ
    /// * `mapping_repository` - URL対応表リポジトリ
    /// * `storage_repository` - リモートストレージリポジトリ（認証済み）
    pub fn new(
        audio_repository: Arc<A>,
        mapping_repository: Arc<U>,
        storage_repository: Arc<S>,
    ) -> Self {
        Self {
            discover_use_case: DiscoverAudioUseCase::new(audio_repository),
            mapping_repository,
            storage_repository,
        }
    }

    /// 同期を実行する
    ///
    /// # Errors
    ///
    /// リモートの列挙、対応表の読み書き、ディレクトリの走査に失敗した場合にエラーを返す。
    /// 個々のファイルのアップロード失敗はエラーにせず結果に記録する
    pub async fn execute(&self, config: &SyncConfig) -> Result<SyncSummary> {
        let remote_files: HashMap<String, String> = self
            .storage_repository
            .list_audio_files(&config.folder_id)
            .await?
            .into_iter()
            .map(|file| (file.name, file.download_url))
            .collect();
        info!("Found {} files already on remote", remote_files.len());

        let mut mapping = self.mapping_repository.load(&config.mapping_path).await?;

        let filter = ExclusionFilter::new(config.exclude_markers.clone());
        let local_files = self
            .discover_use_case
            .execute(&config.audio_dir, &config.audio_extension, &filter)
            .await?;
        info!("Found {} local audio files", local_files.len());

        let mut outcomes = Vec::with_capacity(local_files.len());

        for file in &local_files {
            let outcome = if let Some(url) = remote_files.get(&file.filename) {
                mapping.insert(file.filename.clone(), url.clone());
                SyncOutcome::OnRemote { url: url.clone() }
            } else if mapping.contains(&file.filename) {
                SyncOutcome::AlreadyMapped
            } else if config.dry_run {
                SyncOutcome::WouldUpload
            } else {
                match self.upload_and_share(file, &config.folder_id).await {
                    Ok(remote) => {
                        mapping.insert(file.filename.clone(), remote.download_url.clone());
                        SyncOutcome::Uploaded {
                            url: remote.download_url,
                        }
                    }
                    Err(e) => {
                        warn!("Failed to upload {}: {:#}", file.filename, e);
                        SyncOutcome::Failed {
                            error: format!("{:#}", e),
                        }
                    }
                }
            };

            outcomes.push((file.filename.clone(), outcome));
        }

        let saved = if config.dry_run {
            false
        } else {
            self.mapping_repository
                .save(&config.mapping_path, &mapping)
                .await?;
            true
        };

        Ok(SyncSummary {
            remote_count: remote_files.len(),
            outcomes,
            total_mapped: mapping.len(),
            saved,
        })
    }

    /// アップロードして公開する。公開に失敗した場合もファイル単位の失敗とする
    async fn upload_and_share(&self, file: &AudioFile, folder_id: &str) -> Result<RemoteFile> {
        info!("Uploading {}...", file.filename);
        let remote = self
            .storage_repository
            .upload_file(&file.path, folder_id)
            .await?;
        self.storage_repository.share_publicly(&remote.id).await?;
        Ok(remote)
    }
}
