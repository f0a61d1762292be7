//! ffprobe subprocess handling

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

use super::models::ProbeOutput;
use crate::domain::entities::episode::AudioMetadata;

/// タグが無いときの既定値
#[derive(Debug, Clone)]
pub struct MetadataDefaults {
    pub artist: String,
    pub album: String,
}

/// Run ffprobe against a single file and return its JSON output
///
/// # Arguments
/// * `ffprobe_path` - Path to the ffprobe binary
/// * `audio_path` - Path to the audio file
pub fn run_ffprobe(ffprobe_path: &str, audio_path: &Path) -> Result<String> {
    // -v quiet           : No log output on stderr
    // -print_format json : Machine readable output
    // -show_format       : Container level facts and tags
    let output = Command::new(ffprobe_path)
        .args(["-v", "quiet", "-print_format", "json", "-show_format"])
        .arg(audio_path)
        .output()
        .with_context(|| format!("Failed to run {}", ffprobe_path))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "ffprobe exited with status {}: {}",
            output.status,
            stderr.lines().last().unwrap_or("no output")
        );
    }

    String::from_utf8(output.stdout).context("ffprobe output is not valid UTF-8")
}

/// Convert ffprobe JSON output into AudioMetadata
///
/// * `title` falls back to `stem`, `artist`/`album` to `defaults`, `comment` to ""
/// * `duration` is floored to whole seconds, 0 when absent
/// * `size` is 0 when absent
pub fn parse_probe_output(
    json: &str,
    stem: &str,
    defaults: &MetadataDefaults,
) -> Result<AudioMetadata> {
    let probe: ProbeOutput =
        serde_json::from_str(json).context("Failed to parse ffprobe JSON output")?;
    let format = &probe.format;

    let duration_seconds = match format.duration.as_deref().map(str::trim) {
        None | Some("") | Some("N/A") => 0,
        Some(raw) => {
            let duration: f64 = raw
                .parse()
                .with_context(|| format!("Invalid duration: {}", raw))?;
            if !duration.is_finite() || duration < 0.0 {
                bail!("Invalid duration: {}", raw);
            }
            duration.floor() as u64
        }
    };

    let size_bytes = match format.size.as_deref().map(str::trim) {
        None | Some("") | Some("N/A") => 0,
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("Invalid size: {}", raw))?,
    };

    Ok(AudioMetadata {
        title: format.tag("title").unwrap_or(stem).to_string(),
        artist: format
            .tag("artist")
            .unwrap_or(defaults.artist.as_str())
            .to_string(),
        album: format
            .tag("album")
            .unwrap_or(defaults.album.as_str())
            .to_string(),
        comment: format.tag("comment").unwrap_or_default().to_string(),
        duration_seconds,
        size_bytes,
    })
}
