//! RSS Feed Writer
//!
//! Feed を RSS 2.0 文書に変換する
//!
//! 出力は2スペースでインデントし、空行は含めない。実行時刻などは一切
//! 埋め込まないので、同じ入力からは常に同じバイト列になる。

use anyhow::{Context, Result};
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

use crate::domain::entities::audio_file::mime_type_for_filename;
use crate::domain::entities::episode::Episode;
use crate::domain::entities::feed::{ChannelInfo, Feed};
use crate::domain::services::episode_service::EpisodeService;

pub const ITUNES_NS: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Render a feed as a pretty-printed RSS document
pub fn render_feed(feed: &Feed) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    rss.push_attribute(("xmlns:itunes", ITUNES_NS));
    rss.push_attribute(("xmlns:atom", ATOM_NS));
    writer.write_event(Event::Start(rss))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_channel(&mut writer, &feed.channel)?;
    for episode in &feed.episodes {
        write_item(&mut writer, episode)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    let xml = String::from_utf8(writer.into_inner().into_inner())
        .context("Rendered feed is not valid UTF-8")?;

    Ok(strip_blank_lines(&xml))
}

fn write_channel(writer: &mut XmlWriter, channel: &ChannelInfo) -> Result<()> {
    write_text_element(writer, "title", &channel.title)?;
    write_text_element(writer, "description", &channel.description)?;
    write_text_element(writer, "language", &channel.language)?;
    write_text_element(writer, "link", &channel.link)?;

    write_text_element(writer, "itunes:author", &channel.author)?;
    let mut category = BytesStart::new("itunes:category");
    category.push_attribute(("text", channel.category.as_str()));
    writer.write_event(Event::Empty(category))?;
    write_text_element(writer, "itunes:explicit", channel.explicit_label())?;

    let mut atom_link = BytesStart::new("atom:link");
    atom_link.push_attribute(("href", channel.self_link.as_str()));
    atom_link.push_attribute(("rel", "self"));
    atom_link.push_attribute(("type", "application/rss+xml"));
    writer.write_event(Event::Empty(atom_link))?;

    Ok(())
}

fn write_item(writer: &mut XmlWriter, episode: &Episode) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    write_text_element(writer, "title", &episode.title)?;
    write_text_element(writer, "description", &episode.description)?;
    write_text_element(
        writer,
        "pubDate",
        &EpisodeService::format_pub_date(&episode.published),
    )?;
    write_text_element(writer, "guid", &episode.audio_url)?;

    let length = episode.size_bytes.to_string();
    let mime_type = mime_type_for_filename(&episode.filename);
    let mut enclosure = BytesStart::new("enclosure");
    enclosure.push_attribute(("url", episode.audio_url.as_str()));
    enclosure.push_attribute(("type", mime_type.as_str()));
    enclosure.push_attribute(("length", length.as_str()));
    writer.write_event(Event::Empty(enclosure))?;

    if let Some(duration) = EpisodeService::format_duration(episode.duration_seconds) {
        write_text_element(writer, "itunes:duration", &duration)?;
    }
    write_text_element(writer, "itunes:author", &episode.artist)?;

    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Drop whitespace-only lines and end with a single newline
fn strip_blank_lines(xml: &str) -> String {
    let mut out = xml
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}
