//! # Metadata Repository Trait
//!
//! 音声メタデータの抽出を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::audio_file::AudioFile;
use crate::domain::entities::episode::AudioMetadata;

/// メタデータリポジトリ
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// メタデータを抽出する
    ///
    /// # Errors
    ///
    /// 外部ツールの起動や出力の解析に失敗した場合にエラーを返す。
    /// 呼び出し側はそのファイルだけを読み飛ばす
    async fn extract_metadata(&self, file: &AudioFile) -> Result<AudioMetadata>;
}
