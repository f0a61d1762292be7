//! # Feed Entity
//!
//! チャンネル情報と並べ替え済みエピソード列

use super::episode::Episode;

/// チャンネルレベルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub title: String,
    pub description: String,
    pub language: String,
    /// チャンネルのWebサイト
    pub link: String,
    /// フィード自身の公開URL（atom:link rel="self"）
    pub self_link: String,
    pub author: String,
    pub category: String,
    pub explicit: bool,
}

impl ChannelInfo {
    /// `itunes:explicit` に書き出す値
    pub fn explicit_label(&self) -> &'static str {
        if self.explicit {
            "yes"
        } else {
            "no"
        }
    }
}

/// フィード
///
/// 毎回すべて作り直す（前回のフィードとの差分は取らない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub channel: ChannelInfo,
    /// 出力順に並んだエピソード
    pub episodes: Vec<Episode>,
}

impl Feed {
    pub fn new(channel: ChannelInfo, episodes: Vec<Episode>) -> Self {
        Self { channel, episodes }
    }
}
