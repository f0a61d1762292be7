//! # AudioFile Entity
//!
//! ディレクトリ走査で見つかったローカル音声ファイル

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// ローカル音声ファイル
///
/// ファイル名以外の識別子は持たない（一意性はファイルシステムが保証する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    /// ファイルのフルパス
    pub path: PathBuf,
    /// ファイル名（拡張子付き）
    pub filename: String,
    /// 最終更新日時（UTC）
    pub modified: DateTime<Utc>,
}

impl AudioFile {
    /// パスと更新日時から作成
    pub fn new(path: impl Into<PathBuf>, modified: DateTime<Utc>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path,
            filename,
            modified,
        }
    }

    /// 拡張子を除いたファイル名
    pub fn stem(&self) -> String {
        Path::new(&self.filename)
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| self.filename.clone())
    }
}

/// 拡張子に対応する MIME タイプ（大文字小文字は区別しない）
pub fn mime_type_for_extension(extension: &str) -> String {
    let extension = extension.trim_start_matches('.').to_ascii_lowercase();
    match extension.as_str() {
        "mp3" => "audio/mpeg".to_string(),
        "m4a" | "m4b" => "audio/x-m4a".to_string(),
        "aac" => "audio/aac".to_string(),
        "wav" => "audio/wav".to_string(),
        "ogg" | "oga" => "audio/ogg".to_string(),
        "opus" => "audio/opus".to_string(),
        "flac" => "audio/flac".to_string(),
        other => format!("audio/{}", other),
    }
}

/// ファイル名の拡張子から MIME タイプを求める。拡張子が無ければ MP3 とみなす
pub fn mime_type_for_filename(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|ext| mime_type_for_extension(&ext.to_string_lossy()))
        .unwrap_or_else(|| mime_type_for_extension("mp3"))
}
