//! # Build Feed Use Case
//!
//! RSSフィード生成ユースケース

use anyhow::Result;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::dto::feed_config::FeedConfig;
use crate::application::use_cases::discover_audio::DiscoverAudioUseCase;
use crate::domain::entities::episode::Episode;
use crate::domain::entities::feed::Feed;
use crate::domain::repositories::audio_repository::AudioRepository;
use crate::domain::repositories::feed_repository::FeedRepository;
use crate::domain::repositories::mapping_repository::MappingRepository;
use crate::domain::repositories::metadata_repository::MetadataRepository;
use crate::domain::services::episode_service::EpisodeService;
use crate::domain::services::exclusion_filter::ExclusionFilter;
use crate::domain::services::url_resolver::UrlResolver;

/// フィード生成結果のサマリー
#[derive(Debug, Clone)]
pub struct FeedSummary {
    /// フィードに載ったエピソード数
    pub episode_count: usize,
    /// メタデータが取れず読み飛ばしたファイル名
    pub skipped: Vec<String>,
    /// 出力したフィードのパス
    pub output_path: PathBuf,
}

/// RSSフィード生成ユースケース
///
/// 音声ファイルごとにメタデータとURLを集めてエピソードを作り、
/// 新しい順に並べてフィードとして書き出す
pub struct BuildFeedUseCase<A, M, U, F>
where
    A: AudioRepository,
    M: MetadataRepository,
    U: MappingRepository,
    F: FeedRepository,
{
    discover_use_case: DiscoverAudioUseCase<A>,
    metadata_repository: Arc<M>,
    mapping_repository: Arc<U>,
    feed_repository: Arc<F>,
}

impl<A, M, U, F> BuildFeedUseCase<A, M, U, F>
where
    A: AudioRepository,
    M: MetadataRepository,
    U: MappingRepository,
    F: FeedRepository,
{
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `audio_repository` - 音声ファイルリポジトリ
    /// * `metadata_repository` - メタデータリポジトリ
    /// * `mapping_repository` - URL対応表リポジトリ
    /// * `feed_repository` - フィードリポジトリ
    pub fn new(
        audio_repository: Arc<A>,
        metadata_repository: Arc<M>,
        mapping_repository: Arc<U>,
        feed_repository: Arc<F>,
    ) -> Self {
        Self {
            discover_use_case: DiscoverAudioUseCase::new(audio_repository),
            metadata_repository,
            mapping_repository,
            feed_repository,
        }
    }

    /// フィードを組み立てる（書き出しはしない）
    ///
    /// # Returns
    ///
    /// フィードと、読み飛ばしたファイル名のリスト
    ///
    /// # Errors
    ///
    /// 対応表の読み込みやディレクトリの走査に失敗した場合にエラーを返す。
    /// 個々のファイルのメタデータ抽出失敗はエラーにしない
    pub async fn build(&self, config: &FeedConfig) -> Result<(Feed, Vec<String>)> {
        let mapping = self.mapping_repository.load(&config.mapping_path).await?;
        info!("Loaded {} mapped URLs", mapping.len());

        let filter = ExclusionFilter::new(config.exclude_markers.clone());
        let files = self
            .discover_use_case
            .execute(&config.audio_dir, &config.audio_extension, &filter)
            .await?;

        let resolver = UrlResolver::new(config.fallback_base_url.as_str());
        let mut episodes = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();

        for file in &files {
            info!("Processing: {}", file.filename);

            let metadata = match self.metadata_repository.extract_metadata(file).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(
                        "Error reading metadata from {}: {:#}",
                        file.path.display(),
                        e
                    );
                    skipped.push(file.filename.clone());
                    continue;
                }
            };

            let audio_url = resolver.resolve(&file.filename, &mapping);
            episodes.push(Episode::from_parts(
                file,
                metadata,
                audio_url,
                &config.description_prefix,
            ));
        }

        EpisodeService::sort_newest_first(&mut episodes);

        Ok((Feed::new(config.channel.clone(), episodes), skipped))
    }

    /// フィードを組み立てて出力先に書き出す
    ///
    /// # Errors
    ///
    /// 組み立てまたは書き出しに失敗した場合にエラーを返す
    pub async fn execute(&self, config: &FeedConfig) -> Result<FeedSummary> {
        let (feed, skipped) = self.build(config).await?;

        self.feed_repository
            .write_feed(&config.feed_output_path, &feed)
            .await?;

        Ok(FeedSummary {
            episode_count: feed.episodes.len(),
            skipped,
            output_path: config.feed_output_path.clone(),
        })
    }
}
