// GET /api/channel?url=: resolve a channel and list its recent uploads.
//
// Counts are returned as plain numbers; formatting them for display is the
// front-end's job.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::source::{ChannelOverview, RecentVideo};
use crate::web::{ApiError, AppState};

#[derive(Deserialize, Default)]
pub struct ChannelQuery {
    /// Channel, handle, or video URL
    pub url: Option<String>,
}

impl ChannelQuery {
    /// The URL parameter, rejecting a missing or blank one.
    pub fn require_url(&self) -> Result<&str, ApiError> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Channel URL is required".to_string()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResponse {
    pub channel_id: String,
    pub title: String,
    pub subscriber_count: u64,
    pub recent_videos: Vec<VideoResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub published_at: DateTime<Utc>,
    pub statistics: VideoStatistics,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

impl From<&RecentVideo> for VideoResponse {
    fn from(video: &RecentVideo) -> Self {
        Self {
            id: video.id.clone(),
            title: video.title.clone(),
            url: video.url.clone(),
            thumbnail: video.thumbnail.clone(),
            published_at: video.published_at,
            statistics: VideoStatistics {
                view_count: video.view_count,
                like_count: video.like_count,
                comment_count: video.comment_count,
            },
        }
    }
}

impl From<&ChannelOverview> for ChannelResponse {
    fn from(channel: &ChannelOverview) -> Self {
        Self {
            channel_id: channel.display_id().to_string(),
            title: channel.title.clone(),
            subscriber_count: channel.subscriber_count,
            recent_videos: channel.recent_videos.iter().map(VideoResponse::from).collect(),
        }
    }
}

/// GET /api/channel: channel overview for a URL.
pub async fn get_channel(
    State(state): State<AppState>,
    Query(params): Query<ChannelQuery>,
) -> Result<Json<ChannelResponse>, ApiError> {
    let url = params.require_url()?;
    let channel = state.source.fetch_channel(url).await?;
    Ok(Json(ChannelResponse::from(&channel)))
}
