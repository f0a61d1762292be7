//! JSON Mapping Repository Implementation
//!
//! MappingRepositoryのJSON実装（URL対応表をJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::url_mapping::UrlMapping;
use crate::domain::repositories::mapping_repository::MappingRepository;

/// JSONファイルベースのURL対応表リポジトリ
///
/// フラットな JSON オブジェクト（ファイル名 → URL）を2スペースインデントで保存する
pub struct JsonMappingRepository;

impl JsonMappingRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルから対応表を読み込む（同期処理）
    fn load_sync(path: &Path) -> Result<UrlMapping> {
        if !path.exists() {
            info!("No existing URL mapping found, starting empty");
            return Ok(UrlMapping::new());
        }

        let content = fs::read_to_string(path).context("Failed to read URL mapping file")?;

        let mapping: UrlMapping =
            serde_json::from_str(&content).context("Failed to parse URL mapping JSON")?;

        info!("Loaded URL mapping: {} entries", mapping.len());

        Ok(mapping)
    }

    /// ファイルに対応表を保存する（同期処理）
    fn save_sync(path: &Path, mapping: &UrlMapping) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create mapping directory")?;
        }

        let json = serde_json::to_string_pretty(mapping).context("Failed to serialize URL mapping")?;

        fs::write(path, json).context("Failed to write URL mapping file")?;

        info!("Saved URL mapping: {} entries", mapping.len());

        Ok(())
    }
}

#[async_trait]
impl MappingRepository for JsonMappingRepository {
    async fn load(&self, path: &Path) -> Result<UrlMapping> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn save(&self, path: &Path, mapping: &UrlMapping) -> Result<()> {
        let path: PathBuf = path.to_path_buf();
        let mapping = mapping.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &mapping))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(())
    }
}

impl Default for JsonMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_nonexistent_file() {
        let result = JsonMappingRepository::load_sync(Path::new("/nonexistent/drive-urls.json"));
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_load_valid_mapping() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{
  "vision.mp3": "https://drive.google.com/uc?export=download&id=1",
  "roadmap.mp3": "https://drive.google.com/uc?export=download&id=2"
}"#;
        file.write_all(json.as_bytes()).unwrap();

        let mapping = JsonMappingRepository::load_sync(file.path()).unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(
            mapping.get("roadmap.mp3"),
            Some("https://drive.google.com/uc?export=download&id=2")
        );
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[1, 2, 3]").unwrap();

        let result = JsonMappingRepository::load_sync(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_save_uses_two_space_indent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("drive-urls.json");

        let mut mapping = UrlMapping::new();
        mapping.insert("b.mp3", "https://example.com/b");
        mapping.insert("a.mp3", "https://example.com/a");

        JsonMappingRepository::save_sync(&path, &mapping).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"a.mp3\": \"https://example.com/a\",\n  \"b.mp3\": \"https://example.com/b\"\n}"
        );
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/drive-urls.json");

        JsonMappingRepository::save_sync(&path, &UrlMapping::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_round_trip_is_byte_stable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("drive-urls.json");
        let mut mapping = UrlMapping::new();
        mapping.insert("z.mp3", "https://example.com/z");
        mapping.insert("m.mp3", "https://example.com/m");

        JsonMappingRepository::save_sync(&path, &mapping).unwrap();
        let first = fs::read(&path).unwrap();

        let reloaded = JsonMappingRepository::load_sync(&path).unwrap();
        JsonMappingRepository::save_sync(&path, &reloaded).unwrap();

        assert_eq!(first, fs::read(&path).unwrap());
    }

    #[tokio::test]
    async fn test_async_load_and_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("drive-urls.json");
        let repo = JsonMappingRepository::new();

        let mut mapping = repo.load(&path).await.unwrap();
        mapping.insert("a.mp3", "https://example.com/a");
        repo.save(&path, &mapping).await.unwrap();

        assert_eq!(repo.load(&path).await.unwrap(), mapping);
    }
}
