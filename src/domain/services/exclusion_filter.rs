//! # Exclusion Filter
//!
//! 一時ファイル・チャンクファイルの除外ルール
//!
//! 除外されたファイルはフィードにも載らず、アップロードもされない。

use crate::domain::entities::audio_file::AudioFile;

/// 既定の除外マーカー
pub const DEFAULT_EXCLUDE_MARKERS: [&str; 2] = [".temp.", ".chunk"];

/// ファイル名に含まれるマーカーで中間生成物を除外するフィルタ
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    markers: Vec<String>,
}

impl ExclusionFilter {
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }

    /// ファイル名が除外対象かどうか
    pub fn is_excluded(&self, filename: &str) -> bool {
        self.markers
            .iter()
            .any(|marker| !marker.is_empty() && filename.contains(marker.as_str()))
    }

    /// 除外対象を取り除く（元の並び順は保つ）
    pub fn retain(&self, files: Vec<AudioFile>) -> Vec<AudioFile> {
        files
            .into_iter()
            .filter(|file| !self.is_excluded(&file.filename))
            .collect()
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDE_MARKERS
                .iter()
                .map(|marker| marker.to_string())
                .collect(),
        )
    }
}
