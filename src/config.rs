use std::env;

use anyhow::Result;

use crate::youtube::client::{DEFAULT_API_URL, DEFAULT_RECENT_VIDEOS};

/// Default HTTP port for `channelscope serve`.
pub const DEFAULT_PORT: u16 = 4001;

/// YouTube caps playlistItems.list at 50 results per page.
const MAX_RECENT_VIDEOS: u32 = 50;

/// Central configuration loaded from environment variables.
///
/// The API key comes from the environment (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// YouTube Data API key (YOUTUBE_API_KEY)
    pub youtube_api_key: String,
    /// Data API base URL (defaults to https://www.googleapis.com/youtube/v3)
    pub youtube_api_url: String,
    /// Port for the HTTP server (PORT, default 4001)
    pub port: u16,
    /// Bind address for the HTTP server (CHANNELSCOPE_BIND, default 0.0.0.0)
    pub bind: String,
    /// How many recent uploads to score per channel (CHANNELSCOPE_RECENT_VIDEOS)
    pub recent_videos: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the API key, which is only checked
    /// when something actually needs to call YouTube.
    pub fn load() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let recent_videos = match env::var("CHANNELSCOPE_RECENT_VIDEOS") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| {
                    anyhow::anyhow!("CHANNELSCOPE_RECENT_VIDEOS must be a number, got {raw:?}")
                })?
                .clamp(1, MAX_RECENT_VIDEOS),
            Err(_) => DEFAULT_RECENT_VIDEOS,
        };

        Ok(Self {
            youtube_api_key: env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            youtube_api_url: env::var("YOUTUBE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            port,
            bind: env::var("CHANNELSCOPE_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
            recent_videos,
        })
    }

    /// Check that the YouTube API key is configured.
    /// Call this before any operation that fetches channel data.
    pub fn require_api_key(&self) -> Result<()> {
        if self.youtube_api_key.is_empty() {
            anyhow::bail!(
                "YOUTUBE_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
