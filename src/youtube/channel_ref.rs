// Channel URL parsing: what a user-supplied URL points at.
//
// Users paste whatever they have open: a video page, a short link, a
// channel handle page, or a legacy /channel/ URL. Each one resolves to a
// channel ID differently, so parsing only classifies the reference. The
// API lookups happen in `channel.rs`.

use std::sync::OnceLock;

use percent_encoding::percent_decode_str;
use regex_lite::Regex;
use reqwest::Url;

use crate::source::SourceError;

/// A parsed reference to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelRef {
    /// A video page; the channel is the video's uploader.
    Video(String),
    /// A channel handle, without the leading `@`.
    Handle(String),
    /// A channel ID (`UC...`).
    Id(String),
}

fn handle_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^/@([^/]+)").expect("valid handle pattern"))
}

impl ChannelRef {
    /// Parse a channel, handle, or video URL.
    ///
    /// The scheme is optional (`youtube.com/@name` works). Hosts other than
    /// youtube.com and youtu.be are rejected.
    pub fn parse(input: &str) -> Result<Self, SourceError> {
        let invalid = || SourceError::InvalidUrl(input.to_string());

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let url = Url::parse(trimmed)
            .or_else(|_| Url::parse(&format!("https://{trimmed}")))
            .map_err(|_| invalid())?;

        let host = url.host_str().unwrap_or_default();
        let host = host
            .strip_prefix("www.")
            .or_else(|| host.strip_prefix("m."))
            .unwrap_or(host);

        match host {
            "youtu.be" => url
                .path_segments()
                .and_then(|mut segments| segments.next())
                .filter(|id| !id.is_empty())
                .map(|id| ChannelRef::Video(id.to_string()))
                .ok_or_else(invalid),
            "youtube.com" => Self::from_youtube_path(&url).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }

    fn from_youtube_path(url: &Url) -> Option<Self> {
        let path = url.path();

        if path == "/watch" {
            return url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())
                .filter(|id| !id.is_empty())
                .map(ChannelRef::Video);
        }

        // Url keeps non-ASCII path bytes percent-encoded
        if let Some(caps) = handle_pattern().captures(path) {
            let handle = percent_decode_str(caps.get(1)?.as_str()).decode_utf8().ok()?;
            return Some(ChannelRef::Handle(handle.into_owned()));
        }

        let mut segments = url.path_segments()?;
        match (segments.next(), segments.next()) {
            (Some("channel"), Some(id)) if !id.is_empty() => Some(ChannelRef::Id(id.to_string())),
            _ => None,
        }
    }
}
