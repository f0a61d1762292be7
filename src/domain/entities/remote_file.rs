//! # RemoteFile Entity
//!
//! リモートストレージ上のファイル

/// リモートストレージ上のファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    /// ストレージ側のファイルID
    pub id: String,
    /// ファイル名
    pub name: String,
    /// 直接ダウンロードできるURL
    pub download_url: String,
}
