// YouTube Data API v3 client: API-key authenticated GET requests.
//
// Every call this service makes is a read of public data, so an API key is
// all the auth it needs. The client is built once at startup and handed to
// whatever needs it (web state, CLI commands).

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default YouTube Data API endpoint.
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Number of recent uploads fetched per channel when not configured.
pub const DEFAULT_RECENT_VIDEOS: u32 = 5;

/// Thin reqwest wrapper around the YouTube Data API.
pub struct YouTubeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    recent_videos: u32,
}

impl YouTubeClient {
    /// Create a client for the given API base URL.
    ///
    /// Pass a different base URL to point at a mock server in tests.
    pub fn new(base_url: &str, api_key: &str, recent_videos: u32) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("channelscope/0.1 (channel-analysis)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            recent_videos,
        })
    }

    /// How many recent uploads to fetch per channel.
    pub fn recent_videos(&self) -> u32 {
        self.recent_videos
    }

    /// GET a Data API resource (e.g. "channels", "videos") and deserialize it.
    ///
    /// `params` are query string pairs; the API key is appended automatically.
    /// Errors never carry the request URL, since it contains the key.
    pub async fn api_get<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);

        debug!(resource = resource, "YouTube API GET request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("YouTube API request failed: {resource}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("YouTube API {resource} returned {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to deserialize {resource} response"))
    }
}
