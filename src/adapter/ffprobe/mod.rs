//! ffprobe Adapter Modules
//!
//! 外部ツール ffprobe によるメタデータ抽出

pub mod models;
pub mod runner;

pub use runner::{parse_probe_output, run_ffprobe, MetadataDefaults};
