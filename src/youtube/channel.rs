// Channel fetching: URL -> channel ID -> channel stats + recent uploads.
//
// Four API calls at most:
// 1. Resolve the URL to a channel ID (videos.list or search.list)
// 2. channels.list for title, subscriber count and the uploads playlist
// 3. playlistItems.list for the newest video IDs
// 4. videos.list for those videos' statistics

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::channel_ref::ChannelRef;
use super::client::YouTubeClient;
use super::models::{
    parse_count, ChannelItem, ListResponse, PlaylistItem, SearchResult, VideoItem,
};
use crate::source::{ChannelOverview, ChannelSource, RecentVideo, SourceError};

impl YouTubeClient {
    /// Resolve a parsed channel reference to a channel ID.
    pub async fn resolve_channel_id(&self, channel: &ChannelRef) -> Result<String, SourceError> {
        match channel {
            ChannelRef::Id(id) => Ok(id.clone()),
            ChannelRef::Video(video_id) => {
                let resp: ListResponse<VideoItem> = self
                    .api_get("videos", &[("part", "snippet"), ("id", video_id.as_str())])
                    .await
                    .map_err(SourceError::Upstream)?;
                let channel_id = resp.items.into_iter().next().map(|v| v.snippet.channel_id);
                debug!(video_id = %video_id, channel_id = ?channel_id, "Resolved video to channel");
                channel_id.ok_or_else(|| SourceError::NotFound(format!("video {video_id}")))
            }
            ChannelRef::Handle(handle) => {
                let query = format!("@{handle}");
                let resp: ListResponse<SearchResult> = self
                    .api_get(
                        "search",
                        &[
                            ("part", "snippet"),
                            ("q", query.as_str()),
                            ("type", "channel"),
                            ("maxResults", "1"),
                        ],
                    )
                    .await
                    .map_err(SourceError::Upstream)?;
                let channel_id = resp.items.into_iter().next().map(|r| r.snippet.channel_id);
                debug!(handle = %handle, channel_id = ?channel_id, "Resolved handle to channel");
                channel_id.ok_or_else(|| SourceError::NotFound(format!("@{handle}")))
            }
        }
    }

    /// Fetch channel statistics and its most recent uploads.
    pub async fn fetch_overview(&self, channel_id: &str) -> Result<ChannelOverview, SourceError> {
        let resp: ListResponse<ChannelItem> = self
            .api_get(
                "channels",
                &[
                    ("part", "snippet,statistics,contentDetails"),
                    ("id", channel_id),
                ],
            )
            .await
            .map_err(SourceError::Upstream)?;

        let channel = resp
            .items
            .into_iter()
            .next()
            .ok_or_else(|| SourceError::NotFound(channel_id.to_string()))?;

        let subscriber_count = if channel.statistics.hidden_subscriber_count {
            0
        } else {
            parse_count(channel.statistics.subscriber_count.as_deref())
        };

        let uploads = &channel.content_details.related_playlists.uploads;
        let recent_videos = self
            .fetch_recent_videos(uploads)
            .await
            .map_err(SourceError::Upstream)?;

        info!(
            channel_id = %channel.id,
            title = %channel.snippet.title,
            subscribers = subscriber_count,
            videos = recent_videos.len(),
            "Fetched channel overview"
        );

        Ok(ChannelOverview {
            channel_id: channel.id,
            custom_url: channel.snippet.custom_url,
            title: channel.snippet.title,
            subscriber_count,
            recent_videos,
        })
    }

    /// Fetch the newest uploads from a channel's uploads playlist.
    async fn fetch_recent_videos(&self, playlist_id: &str) -> anyhow::Result<Vec<RecentVideo>> {
        let limit = self.recent_videos().to_string();
        let playlist: ListResponse<PlaylistItem> = self
            .api_get(
                "playlistItems",
                &[
                    ("part", "contentDetails"),
                    ("playlistId", playlist_id),
                    ("maxResults", limit.as_str()),
                ],
            )
            .await
            .with_context(|| format!("Failed to list uploads playlist {playlist_id}"))?;

        let ids: Vec<String> = playlist
            .items
            .into_iter()
            .map(|item| item.content_details.video_id)
            .collect();

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids.join(",");
        let details: ListResponse<VideoItem> = self
            .api_get("videos", &[("part", "statistics,snippet"), ("id", joined.as_str())])
            .await
            .context("Failed to fetch video statistics")?;

        Ok(details.items.into_iter().filter_map(to_recent_video).collect())
    }
}

/// Convert an API video item, dropping it if its publish time is unreadable.
pub fn to_recent_video(item: VideoItem) -> Option<RecentVideo> {
    let published_at = match DateTime::parse_from_rfc3339(&item.snippet.published_at) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            warn!(
                video_id = %item.id,
                published_at = %item.snippet.published_at,
                error = %e,
                "Skipping video with unparsable publish time"
            );
            return None;
        }
    };

    Some(RecentVideo {
        url: format!("https://www.youtube.com/watch?v={}", item.id),
        thumbnail: item.snippet.thumbnails.best_url(),
        title: item.snippet.title,
        published_at,
        view_count: parse_count(item.statistics.view_count.as_deref()),
        like_count: parse_count(item.statistics.like_count.as_deref()),
        comment_count: parse_count(item.statistics.comment_count.as_deref()),
        id: item.id,
    })
}

#[async_trait]
impl ChannelSource for YouTubeClient {
    async fn fetch_channel(&self, url: &str) -> Result<ChannelOverview, SourceError> {
        let channel = ChannelRef::parse(url)?;
        debug!(url = url, channel = ?channel, "Parsed channel URL");

        let channel_id = self.resolve_channel_id(&channel).await?;
        self.fetch_overview(&channel_id).await
    }
}
