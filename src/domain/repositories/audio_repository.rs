//! # Audio Repository Trait
//!
//! ローカル音声ファイルの発見を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::audio_file::AudioFile;

/// 音声ファイルリポジトリ
#[async_trait]
pub trait AudioRepository: Send + Sync {
    /// 音声ファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `audio_dir` - 音声ディレクトリのパス（サブディレクトリは見ない）
    /// * `extension` - 対象の拡張子（例: `"mp3"`）
    ///
    /// # Returns
    ///
    /// ファイル名の辞書順に並んだ音声ファイル。ディレクトリが無ければ空
    async fn discover_audio_files(&self, audio_dir: &Path, extension: &str)
        -> Result<Vec<AudioFile>>;
}
