//! # Episode Service
//!
//! エピソードの並び順と表示用の整形

use chrono::{DateTime, Utc};

use crate::domain::entities::episode::Episode;

/// エピソードに関するビジネスルール
pub struct EpisodeService;

impl EpisodeService {
    /// 公開日時の新しい順に並べ替える
    ///
    /// 比較は `pubDate` と同じ秒単位。安定ソートなので、同じ秒のエピソードは
    /// 元の並び（ファイル名の辞書順）を保つ
    pub fn sort_newest_first(episodes: &mut [Episode]) {
        episodes.sort_by_key(|episode| std::cmp::Reverse(episode.published.timestamp()));
    }

    /// 再生時間を `HH:MM:SS` に整形する
    ///
    /// 0秒の場合は `None`（duration 要素を出力しない）
    pub fn format_duration(duration_seconds: u64) -> Option<String> {
        if duration_seconds == 0 {
            return None;
        }

        let hours = duration_seconds / 3600;
        let minutes = (duration_seconds % 3600) / 60;
        let seconds = duration_seconds % 60;

        Some(format!("{:02}:{:02}:{:02}", hours, minutes, seconds))
    }

    /// RFC 822 形式の公開日（常に UTC, `+0000`）
    pub fn format_pub_date(published: &DateTime<Utc>) -> String {
        published.format("%a, %d %b %Y %H:%M:%S +0000").to_string()
    }
}
