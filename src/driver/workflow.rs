//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::auth::authorize;
use crate::adapter::config::Config;
use crate::adapter::drive::client::UreqDriveClient;
use crate::adapter::ffprobe::MetadataDefaults;
use crate::adapter::repositories::drive_storage_repository::DriveStorageRepository;
use crate::adapter::repositories::ffprobe_metadata_repository::FfprobeMetadataRepository;
use crate::adapter::repositories::file_audio_repository::FileAudioRepository;
use crate::adapter::repositories::json_mapping_repository::JsonMappingRepository;
use crate::adapter::repositories::xml_feed_repository::XmlFeedRepository;
use crate::application::dto::feed_config::FeedConfig;
use crate::application::dto::sync_config::SyncConfig;
use crate::application::use_cases::build_feed::BuildFeedUseCase;
use crate::application::use_cases::sync_audio::{SyncAudioUseCase, SyncOutcome};
use crate::domain::entities::audio_file::mime_type_for_extension;
use crate::domain::entities::feed::ChannelInfo;

/// Build the feed use case settings from the loaded config
pub fn feed_config(config: &Config) -> FeedConfig {
    let channel = &config.channel;
    FeedConfig {
        audio_dir: config.audio_dir(),
        audio_extension: config.audio_extension.clone(),
        feed_output_path: config.feed_output_path(),
        mapping_path: config.mapping_path(),
        fallback_base_url: config.fallback_base_url.clone(),
        exclude_markers: config.exclude_markers.clone(),
        description_prefix: config.episode_defaults.description_prefix.clone(),
        channel: ChannelInfo {
            title: channel.title.clone(),
            description: channel.description.clone(),
            language: channel.language.clone(),
            link: channel.link.clone(),
            self_link: channel.self_link.clone(),
            author: channel.author.clone(),
            category: channel.category.clone(),
            explicit: channel.explicit,
        },
    }
}

/// Build the sync use case settings from the loaded config
pub fn sync_config(config: &Config, dry_run: bool) -> SyncConfig {
    SyncConfig {
        audio_dir: config.audio_dir(),
        audio_extension: config.audio_extension.clone(),
        mapping_path: config.mapping_path(),
        folder_id: config.drive_folder_id.clone(),
        exclude_markers: config.exclude_markers.clone(),
        dry_run,
    }
}

/// Feed Generation Workflow
pub struct FeedWorkflow {
    config: Config,
    use_case: BuildFeedUseCase<
        FileAudioRepository,
        FfprobeMetadataRepository,
        JsonMappingRepository,
        XmlFeedRepository,
    >,
}

impl FeedWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let metadata_repo = Arc::new(FfprobeMetadataRepository::new(
            config.ffprobe_path.clone(),
            MetadataDefaults {
                artist: config.episode_defaults.artist.clone(),
                album: config.episode_defaults.album.clone(),
            },
        ));

        let use_case = BuildFeedUseCase::new(
            Arc::new(FileAudioRepository::new()),
            metadata_repo,
            Arc::new(JsonMappingRepository),
            Arc::new(XmlFeedRepository::new()),
        );

        Self { config, use_case }
    }

    /// Regenerate the feed
    pub async fn execute(&self) -> Result<()> {
        info!("Starting feed generation...");

        let feed_config = feed_config(&self.config);
        println!("✓ Using configuration:");
        println!("  Audio: {}", feed_config.audio_dir.display());
        println!("  Mapping: {}", feed_config.mapping_path.display());
        println!("  Fallback base URL: {}", feed_config.fallback_base_url);

        let summary = self.use_case.execute(&feed_config).await?;

        for filename in &summary.skipped {
            println!("⚠ Skipped {} (metadata unavailable)", filename);
        }
        println!(
            "✓ Wrote {} episodes to {}",
            summary.episode_count,
            summary.output_path.display()
        );
        if !feed_config.channel.self_link.is_empty() {
            println!("  Subscribe: {}", feed_config.channel.self_link);
        }

        Ok(())
    }
}

/// Google Drive Sync Workflow
pub struct SyncWorkflow {
    config: Config,
}

impl SyncWorkflow {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Authenticate, then upload whatever is missing from the mapping
    ///
    /// A missing or unusable credential aborts here, before any Drive call
    pub async fn execute(&self, dry_run: bool) -> Result<()> {
        info!("Starting Drive sync...");
        info!("Dry run: {}", dry_run);

        let access_token = authorize(&self.config.credential_path()).await?;
        println!("✓ Authenticated with Google Drive");

        let storage_repo = Arc::new(DriveStorageRepository::new(
            Arc::new(UreqDriveClient::new(&access_token)),
            mime_type_for_extension(&self.config.audio_extension),
        ));
        let use_case = SyncAudioUseCase::new(
            Arc::new(FileAudioRepository::new()),
            Arc::new(JsonMappingRepository),
            storage_repo,
        );

        let sync_config = sync_config(&self.config, dry_run);
        let summary = use_case.execute(&sync_config).await?;
        println!(
            "✓ Found {} audio files in Drive folder {}",
            summary.remote_count, sync_config.folder_id
        );

        for (filename, outcome) in &summary.outcomes {
            match outcome {
                SyncOutcome::OnRemote { .. } | SyncOutcome::AlreadyMapped => {
                    println!("✓ {}", filename)
                }
                SyncOutcome::Uploaded { url } => println!("↑ {} -> {}", filename, url),
                SyncOutcome::WouldUpload => println!("↑ {} (dry-run, not uploaded)", filename),
                SyncOutcome::Failed { error } => println!("✗ {}: {}", filename, error),
            }
        }

        println!(
            "✓ Uploaded {} files ({} failed)",
            summary.uploaded_count(),
            summary.failed_count()
        );
        println!("  Total mapped: {}", summary.total_mapped);

        if summary.saved {
            println!("✓ Saved URL mapping to {}", sync_config.mapping_path.display());
        } else {
            println!("✓ Dry-run mode (URL mapping not written)");
        }

        Ok(())
    }
}
