//! # DTOs
//!
//! ユースケースに渡す設定

pub mod feed_config;
pub mod sync_config;
