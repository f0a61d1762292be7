//! Configuration
//!
//! JSON 設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::domain::services::exclusion_filter::DEFAULT_EXCLUDE_MARKERS;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Local files
    pub audio_dir: String,
    #[serde(default = "default_audio_extension")]
    pub audio_extension: String,
    pub feed_output_path: String,
    pub mapping_path: String,
    #[serde(default = "default_exclude_markers")]
    pub exclude_markers: Vec<String>,

    // Metadata extraction
    #[serde(default = "default_ffprobe_path")]
    pub ffprobe_path: String,

    // URL resolution
    pub fallback_base_url: String,

    // Google Drive
    pub credential_path: String,
    pub drive_folder_id: String,

    // Feed content
    #[serde(default)]
    pub channel: ChannelSettings,
    #[serde(default)]
    pub episode_defaults: EpisodeDefaults,
}

/// チャンネル情報の設定
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChannelSettings {
    pub title: String,
    pub description: String,
    pub language: String,
    pub link: String,
    pub self_link: String,
    pub author: String,
    pub category: String,
    pub explicit: bool,
}

impl Default for ChannelSettings {
    fn default() -> Self {
        Self {
            title: "Podcast".to_string(),
            description: String::new(),
            language: "en-us".to_string(),
            link: String::new(),
            self_link: String::new(),
            author: String::new(),
            category: "Business".to_string(),
            explicit: false,
        }
    }
}

/// タグが無いときの既定値
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EpisodeDefaults {
    pub artist: String,
    pub album: String,
    pub description_prefix: String,
}

impl Default for EpisodeDefaults {
    fn default() -> Self {
        Self {
            artist: "Unknown Artist".to_string(),
            album: "Unknown Album".to_string(),
            description_prefix: "Episode".to_string(),
        }
    }
}

fn default_audio_extension() -> String {
    "mp3".to_string()
}

fn default_ffprobe_path() -> String {
    "ffprobe".to_string()
}

fn default_exclude_markers() -> Vec<String> {
    DEFAULT_EXCLUDE_MARKERS
        .iter()
        .map(|marker| marker.to_string())
        .collect()
}

/// Expands tilde in path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(expand_path(path))
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    pub fn audio_dir(&self) -> PathBuf {
        expand_path(&self.audio_dir)
    }

    pub fn feed_output_path(&self) -> PathBuf {
        expand_path(&self.feed_output_path)
    }

    pub fn mapping_path(&self) -> PathBuf {
        expand_path(&self.mapping_path)
    }

    pub fn credential_path(&self) -> PathBuf {
        expand_path(&self.credential_path)
    }
}
