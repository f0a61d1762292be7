//! # Episode Entity
//!
//! フィードのエピソードと、その元になる音声メタデータ

use chrono::{DateTime, Utc};

use super::audio_file::AudioFile;

/// 音声ファイルから抽出したメタデータ
///
/// タグが無い項目は抽出時に既定値で埋められている
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// コメントタグ（無ければ空文字）
    pub comment: String,
    /// 再生時間（秒、小数点以下切り捨て）
    pub duration_seconds: u64,
    /// ファイルサイズ（バイト）
    pub size_bytes: u64,
}

/// エピソード
///
/// 実行ごとに組み立てられ、永続化されるのは XML 表現のみ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub filename: String,
    pub title: String,
    pub artist: String,
    pub description: String,
    pub audio_url: String,
    /// 公開日時（ファイルの最終更新日時）
    pub published: DateTime<Utc>,
    pub duration_seconds: u64,
    pub size_bytes: u64,
}

impl Episode {
    /// ファイル・メタデータ・URL からエピソードを組み立てる
    ///
    /// コメントタグが空の場合は `"<description_prefix> - <title>"` を説明文にする
    pub fn from_parts(
        file: &AudioFile,
        metadata: AudioMetadata,
        audio_url: String,
        description_prefix: &str,
    ) -> Self {
        let description = if metadata.comment.is_empty() {
            format!("{} - {}", description_prefix, metadata.title)
        } else {
            metadata.comment
        };

        Self {
            filename: file.filename.clone(),
            title: metadata.title,
            artist: metadata.artist,
            description,
            audio_url,
            published: file.modified,
            duration_seconds: metadata.duration_seconds,
            size_bytes: metadata.size_bytes,
        }
    }
}
