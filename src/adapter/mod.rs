//! Adapter Layer
//!
//! 外部システム（ffprobe, Google Drive, ファイルシステム）との統合

pub mod auth;
pub mod config;
pub mod drive;
pub mod http;
pub mod ffprobe;
pub mod repositories;
pub mod rss;
