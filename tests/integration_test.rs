//! Integration tests for feedsync
//!
//! These tests verify the ffprobe fixture flows through metadata parsing
//! and into the rendered feed.

use chrono::{TimeZone, Utc};
use feedsync::adapter::ffprobe::{parse_probe_output, MetadataDefaults};
use feedsync::adapter::rss::render_feed;
use feedsync::domain::entities::audio_file::AudioFile;
use feedsync::domain::entities::episode::Episode;
use feedsync::domain::entities::feed::{ChannelInfo, Feed};
use std::fs;
use std::path::PathBuf;

/// Get the path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn defaults() -> MetadataDefaults {
    MetadataDefaults {
        artist: "Unknown Artist".to_string(),
        album: "Unknown Album".to_string(),
    }
}

#[test]
fn test_fixture_parses_into_metadata() {
    let json = fs::read_to_string(fixtures_path().join("ffprobe_sample.json"))
        .expect("Failed to read ffprobe_sample.json");

    let metadata = parse_probe_output(&json, "platform-vision", &defaults()).unwrap();

    assert_eq!(metadata.title, "Platform Vision & Roadmap");
    assert_eq!(metadata.artist, "Jaxon Digital");
    assert_eq!(metadata.album, "Project Pivot Strategy");
    assert_eq!(metadata.duration_seconds, 3725);
    assert_eq!(metadata.size_bytes, 59_615_360);
}

#[test]
fn test_fixture_renders_escaped_item() {
    let json = fs::read_to_string(fixtures_path().join("ffprobe_sample.json")).unwrap();
    let metadata = parse_probe_output(&json, "platform-vision", &defaults()).unwrap();

    let file = AudioFile::new(
        "/audio/platform-vision.mp3",
        Utc.with_ymd_and_hms(2025, 10, 7, 14, 3, 9).unwrap(),
    );
    let episode = Episode::from_parts(
        &file,
        metadata,
        "https://drive.google.com/uc?export=download&id=abc".to_string(),
        "Episode",
    );
    let feed = Feed::new(
        ChannelInfo {
            title: "Strategy".to_string(),
            description: "Docs".to_string(),
            language: "en-us".to_string(),
            link: "https://example.com".to_string(),
            self_link: "https://example.com/feed.rss".to_string(),
            author: "Jaxon Digital".to_string(),
            category: "Business".to_string(),
            explicit: false,
        },
        vec![episode],
    );

    let xml = render_feed(&feed).unwrap();

    assert!(xml.contains("<title>Platform Vision &amp; Roadmap</title>"));
    assert!(xml.contains("<description>Where the platform goes next &lt;draft&gt;</description>"));
    assert!(xml.contains("<pubDate>Tue, 07 Oct 2025 14:03:09 +0000</pubDate>"));
    assert!(xml.contains("<itunes:duration>01:02:05</itunes:duration>"));
    assert!(xml.contains(
        "<enclosure url=\"https://drive.google.com/uc?export=download&amp;id=abc\" type=\"audio/mpeg\" length=\"59615360\"/>"
    ));
}
