//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

/// ポッドキャストフィードの生成と Google Drive 同期を行うCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "feedsync")]
#[command(about = "Generate a podcast RSS feed and sync audio to Google Drive", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./feedsync.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Regenerate the RSS feed from the audio directory
    Feed,
    /// Upload unmapped audio files to Google Drive and refresh the URL mapping
    Sync {
        /// Dry run mode - list what would be uploaded without uploading
        #[arg(long)]
        dry_run: bool,
    },
}
