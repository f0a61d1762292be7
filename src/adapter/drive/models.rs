//! Google Drive API Models
//!
//! Drive v3 REST API のリクエスト・レスポンス

use serde::{Deserialize, Serialize};

/// files.list で取得するフィールド
pub const LIST_FIELDS: &str = "nextPageToken, files(id, name)";

/// files.list のレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<DriveFile>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DriveFile {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// files.create のメタデータ部
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub name: String,
    pub parents: Vec<String>,
    pub mime_type: String,
}

impl FileMetadata {
    pub fn audio(
        name: impl Into<String>,
        folder_id: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            parents: vec![folder_id.into()],
            mime_type: mime_type.into(),
        }
    }
}

/// permissions.create のリクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Permission {
    #[serde(rename = "type")]
    pub kind: String,
    pub role: String,
}

impl Permission {
    /// リンクを知っている人なら誰でも閲覧可
    pub fn anyone_reader() -> Self {
        Self {
            kind: "anyone".to_string(),
            role: "reader".to_string(),
        }
    }
}

/// HTML のプレビュー画面ではなくダウンロードになるURL
pub fn direct_download_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={}", file_id)
}

/// フォルダ直下のゴミ箱に入っていない、指定 MIME タイプのファイルを絞り込むクエリ
pub fn audio_folder_query(folder_id: &str, mime_type: &str) -> String {
    format!(
        "'{}' in parents and trashed=false and mimeType='{}'",
        escape_query_value(folder_id),
        escape_query_value(mime_type)
    )
}

fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
