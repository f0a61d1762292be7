//! ffprobe Metadata Repository Implementation
//!
//! MetadataRepositoryのffprobe実装

use anyhow::Result;
use async_trait::async_trait;

use crate::adapter::ffprobe::{parse_probe_output, run_ffprobe, MetadataDefaults};
use crate::domain::entities::audio_file::AudioFile;
use crate::domain::entities::episode::AudioMetadata;
use crate::domain::repositories::metadata_repository::MetadataRepository;

/// ffprobe を呼び出すメタデータリポジトリ
pub struct FfprobeMetadataRepository {
    ffprobe_path: String,
    defaults: MetadataDefaults,
}

impl FfprobeMetadataRepository {
    pub fn new(ffprobe_path: String, defaults: MetadataDefaults) -> Self {
        Self {
            ffprobe_path,
            defaults,
        }
    }
}

#[async_trait]
impl MetadataRepository for FfprobeMetadataRepository {
    async fn extract_metadata(&self, file: &AudioFile) -> Result<AudioMetadata> {
        let ffprobe_path = self.ffprobe_path.clone();
        let defaults = self.defaults.clone();
        let audio_path = file.path.clone();
        let stem = file.stem();

        tokio::task::spawn_blocking(move || {
            let json = run_ffprobe(&ffprobe_path, &audio_path)?;
            parse_probe_output(&json, &stem, &defaults)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}
