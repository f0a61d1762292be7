//! RSS Adapter Modules
//!
//! RSS 2.0 + iTunes podcast 拡張の XML 出力

pub mod writer;

pub use writer::render_feed;
