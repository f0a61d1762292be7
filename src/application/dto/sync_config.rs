//! # Sync Configuration DTO
//!
//! Google Drive 同期の設定

use std::path::PathBuf;

/// 同期設定
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// 音声ディレクトリ
    pub audio_dir: PathBuf,
    /// 対象の拡張子（例: "mp3"）
    pub audio_extension: String,
    /// URL対応表ファイル
    pub mapping_path: PathBuf,
    /// アップロード先フォルダID
    pub folder_id: String,
    /// ファイル名にこれらを含むファイルは除外する
    pub exclude_markers: Vec<String>,
    /// true の場合はアップロードも対応表の保存もしない
    pub dry_run: bool,
}
