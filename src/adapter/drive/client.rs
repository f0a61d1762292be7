//! Google Drive Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use super::models::{DriveFile, FileList, FileMetadata, Permission, LIST_FIELDS};
use crate::adapter::http;

const FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3/files";

/// Trait for the Drive v3 operations feedsync consumes
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
pub trait DriveApi: Send + Sync {
    /// files.list (one page)
    fn list_files(&self, query: &str, page_token: Option<String>) -> Result<FileList>;

    /// files.create with media
    fn upload_file(&self, path: &Path, metadata: &FileMetadata) -> Result<DriveFile>;

    /// permissions.create
    fn create_permission(&self, file_id: &str, permission: &Permission) -> Result<()>;
}

/// Blocking Drive v3 client authenticated with a bearer token
pub struct UreqDriveClient {
    agent: ureq::Agent,
    authorization: String,
}

impl UreqDriveClient {
    pub fn new(access_token: &str) -> Self {
        Self {
            agent: http::agent(),
            authorization: format!("Bearer {}", access_token),
        }
    }

    /// Start a resumable upload session and return its session URI
    fn start_upload_session(&self, metadata: &FileMetadata, content_length: u64) -> Result<String> {
        let response = self
            .agent
            .post(UPLOAD_URL)
            .query("uploadType", "resumable")
            .query("supportsAllDrives", "true")
            .query("fields", "id, name")
            .set("Authorization", &self.authorization)
            .set("X-Upload-Content-Type", &metadata.mime_type)
            .set("X-Upload-Content-Length", &content_length.to_string())
            .send_json(metadata)
            .map_err(http::describe_error)
            .context("Failed to start upload session")?;

        response
            .header("location")
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Upload session response has no Location header"))
    }
}

impl DriveApi for UreqDriveClient {
    fn list_files(&self, query: &str, page_token: Option<String>) -> Result<FileList> {
        let mut request = self
            .agent
            .get(FILES_URL)
            .query("q", query)
            .query("fields", LIST_FIELDS)
            .query("pageSize", "1000")
            .query("supportsAllDrives", "true")
            .query("includeItemsFromAllDrives", "true")
            .set("Authorization", &self.authorization);

        if let Some(token) = page_token.as_deref() {
            request = request.query("pageToken", token);
        }

        request
            .call()
            .map_err(http::describe_error)
            .context("Drive files.list failed")?
            .into_json::<FileList>()
            .context("Failed to parse Drive file list")
    }

    fn upload_file(&self, path: &Path, metadata: &FileMetadata) -> Result<DriveFile> {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let content_length = file
            .metadata()
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();

        let session_uri = self.start_upload_session(metadata, content_length)?;

        self.agent
            .put(&session_uri)
            .set("Content-Type", &metadata.mime_type)
            .set("Content-Length", &content_length.to_string())
            .send(file)
            .map_err(http::describe_error)
            .context("Drive upload failed")?
            .into_json::<DriveFile>()
            .context("Failed to parse Drive upload response")
    }

    fn create_permission(&self, file_id: &str, permission: &Permission) -> Result<()> {
        self.agent
            .post(&format!("{}/{}/permissions", FILES_URL, file_id))
            .query("supportsAllDrives", "true")
            .set("Authorization", &self.authorization)
            .send_json(permission)
            .map_err(http::describe_error)
            .context("Drive permissions.create failed")?;
        Ok(())
    }
}
