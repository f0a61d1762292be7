//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverAudioUseCase**: 音声ファイルの発見と除外フィルタ
//! - **BuildFeedUseCase**: メタデータ抽出・URL解決・RSSフィード生成
//! - **SyncAudioUseCase**: Google Drive への同期と URL 対応表の更新

pub mod build_feed;
pub mod discover_audio;
pub mod sync_audio;
