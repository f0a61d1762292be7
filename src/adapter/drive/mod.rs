//! Google Drive Adapter Modules
//!
//! Google Drive v3 REST API 統合のためのアダプターモジュール

pub mod client;
pub mod models;
