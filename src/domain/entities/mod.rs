//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **AudioFile**: ローカルの音声ファイル
//! - **Episode**: フィードの1エピソード（AudioMetadata から組み立てる）
//! - **Feed**: チャンネル情報とエピソード列
//! - **UrlMapping**: ファイル名 → ダウンロードURL の対応表
//! - **RemoteFile**: リモートストレージ上のファイル

pub mod audio_file;
pub mod episode;
pub mod feed;
pub mod remote_file;
pub mod url_mapping;
