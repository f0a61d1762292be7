//! Feedsync - Podcast Feed Generator & Drive Sync
//!
//! 音声ファイルから RSS フィードを生成し、Google Drive に同期する

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use feedsync::adapter::config::Config;
use feedsync::driver::{Args, Command, FeedWorkflow, SyncWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    match args.command {
        Command::Feed => FeedWorkflow::new(config).execute().await,
        Command::Sync { dry_run } => SyncWorkflow::new(config).execute(dry_run).await,
    }
}
