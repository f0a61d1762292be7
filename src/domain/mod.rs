//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - ffprobe や Google Drive について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（AudioFile, Episode, Feed, UrlMapping など）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（除外フィルタ、URL解決、エピソード整形）

pub mod entities;
pub mod repositories;
pub mod services;
