//! File Audio Repository Implementation
//!
//! AudioRepositoryのファイルシステム実装

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::entities::audio_file::AudioFile;
use crate::domain::repositories::audio_repository::AudioRepository;

/// ファイルシステムベースの音声ファイルリポジトリ
pub struct FileAudioRepository;

impl FileAudioRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 音声ファイルを発見する（内部実装）
    fn discover_audio_files_internal(audio_dir: &Path, extension: &str) -> Result<Vec<AudioFile>> {
        if !audio_dir.exists() {
            warn!("Audio directory does not exist: {}", audio_dir.display());
            return Ok(Vec::new());
        }

        let mut audio_files = Vec::new();

        for entry in WalkDir::new(audio_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some(extension) {
                continue;
            }

            let modified = match entry.metadata().map_err(anyhow::Error::from).and_then(|m| {
                m.modified().map_err(anyhow::Error::from)
            }) {
                Ok(modified) => DateTime::<Utc>::from(modified),
                Err(e) => {
                    warn!("Failed to read modified time of {}: {}", path.display(), e);
                    continue;
                }
            };

            audio_files.push(AudioFile::new(path.to_path_buf(), modified));
        }

        info!(
            "Found {} audio files in {}",
            audio_files.len(),
            audio_dir.display()
        );

        Ok(audio_files)
    }
}

#[async_trait]
impl AudioRepository for FileAudioRepository {
    async fn discover_audio_files(
        &self,
        audio_dir: &Path,
        extension: &str,
    ) -> Result<Vec<AudioFile>> {
        // 非同期なので、tokio::task::spawn_blockingでラップ
        let audio_dir: PathBuf = audio_dir.to_path_buf();
        let extension = extension.to_string();
        tokio::task::spawn_blocking(move || {
            Self::discover_audio_files_internal(&audio_dir, &extension)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FileAudioRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"ID3").unwrap();
    }

    #[test]
    fn test_discover_nonexistent_directory() {
        let result =
            FileAudioRepository::discover_audio_files_internal(Path::new("/nonexistent/audio"), "mp3");
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_discover_sorted_by_filename_with_extension_filter() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "c.mp3");
        touch(temp_dir.path(), "a.mp3");
        touch(temp_dir.path(), "b.wav");
        touch(temp_dir.path(), "notes.txt");
        touch(temp_dir.path(), "B.mp3");

        let files =
            FileAudioRepository::discover_audio_files_internal(temp_dir.path(), "mp3").unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["B.mp3", "a.mp3", "c.mp3"]);
        assert_eq!(files[0].path, temp_dir.path().join("B.mp3"));
    }

    #[test]
    fn test_discover_is_not_recursive() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "top.mp3");
        let nested = temp_dir.path().join("archive");
        fs::create_dir(&nested).unwrap();
        touch(&nested, "old.mp3");

        let files =
            FileAudioRepository::discover_audio_files_internal(temp_dir.path(), "mp3").unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "top.mp3");
    }

    #[test]
    fn test_discover_records_modified_time() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a.mp3");
        let expected: DateTime<Utc> = fs::metadata(temp_dir.path().join("a.mp3"))
            .unwrap()
            .modified()
            .unwrap()
            .into();

        let files =
            FileAudioRepository::discover_audio_files_internal(temp_dir.path(), "mp3").unwrap();

        assert_eq!(files[0].modified, expected);
    }

    #[tokio::test]
    async fn test_discover_async() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a.mp3");

        let repo = FileAudioRepository::new();
        let files = repo
            .discover_audio_files(temp_dir.path(), "mp3")
            .await
            .unwrap();

        assert_eq!(files.len(), 1);
    }
}
