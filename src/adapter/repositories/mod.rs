//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod drive_storage_repository;
pub mod ffprobe_metadata_repository;
pub mod file_audio_repository;
pub mod json_mapping_repository;
pub mod xml_feed_repository;
