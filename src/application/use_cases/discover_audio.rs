//! # Discover Audio Use Case
//!
//! 音声ファイル発見ユースケース

use anyhow::Result;
use log::debug;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::audio_file::AudioFile;
use crate::domain::repositories::audio_repository::AudioRepository;
use crate::domain::services::exclusion_filter::ExclusionFilter;

/// 音声ファイル発見ユースケース
///
/// 指定されたディレクトリから音声ファイルを発見し、一時ファイル・チャンクファイルを除外する
pub struct DiscoverAudioUseCase<R: AudioRepository> {
    audio_repository: Arc<R>,
}

impl<R: AudioRepository> DiscoverAudioUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `audio_repository` - 音声ファイルリポジトリ
    pub fn new(audio_repository: Arc<R>) -> Self {
        Self { audio_repository }
    }

    /// 音声ファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `audio_dir` - 音声ディレクトリのパス
    /// * `extension` - 対象の拡張子
    /// * `filter` - 除外フィルタ
    ///
    /// # Returns
    ///
    /// 除外後の音声ファイル（ファイル名の辞書順）
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        audio_dir: &Path,
        extension: &str,
        filter: &ExclusionFilter,
    ) -> Result<Vec<AudioFile>> {
        let files = self
            .audio_repository
            .discover_audio_files(audio_dir, extension)
            .await?;
        let found = files.len();

        let files = filter.retain(files);
        debug!(
            "Excluded {} temp/chunk files in {}",
            found - files.len(),
            audio_dir.display()
        );

        Ok(files)
    }
}
