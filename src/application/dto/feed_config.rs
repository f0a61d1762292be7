//! # Feed Configuration DTO
//!
//! フィード生成の設定

use std::path::PathBuf;

use crate::domain::entities::feed::ChannelInfo;

/// フィード生成設定
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// 音声ディレクトリ
    pub audio_dir: PathBuf,
    /// 対象の拡張子（例: "mp3"）
    pub audio_extension: String,
    /// フィードの出力先
    pub feed_output_path: PathBuf,
    /// URL対応表ファイル
    pub mapping_path: PathBuf,
    /// 対応表に無いファイルのURLに使うベースURL
    pub fallback_base_url: String,
    /// ファイル名にこれらを含むファイルは除外する
    pub exclude_markers: Vec<String>,
    /// コメントタグが無いときの説明文の接頭辞
    pub description_prefix: String,
    /// チャンネル情報
    pub channel: ChannelInfo,
}
