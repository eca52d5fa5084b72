// Channel source trait: where channel data comes from.
//
// The scoring core only consumes numbers. Turning a channel URL into those
// numbers is the job of a ChannelSource. The production implementation is
// the YouTube Data API client; tests inject stubs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::scoring::{AnalysisInput, VideoMetric};

/// Errors from resolving a channel through an external source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("not a recognized channel or video URL: {0}")]
    InvalidUrl(String),

    #[error("channel not found: {0}")]
    NotFound(String),

    #[error("upstream data API failed: {0:#}")]
    Upstream(#[source] anyhow::Error),
}

/// A channel and its most recent uploads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelOverview {
    pub channel_id: String,
    /// The channel's custom URL (e.g. `@somecreator`), if it has one
    pub custom_url: Option<String>,
    pub title: String,
    pub subscriber_count: u64,
    pub recent_videos: Vec<RecentVideo>,
}

/// One recent upload with its public statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentVideo {
    pub id: String,
    pub title: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

impl RecentVideo {
    pub fn metric(&self) -> VideoMetric {
        VideoMetric {
            view_count: self.view_count,
            like_count: self.like_count,
            comment_count: self.comment_count,
            published_at: self.published_at,
        }
    }
}

impl ChannelOverview {
    /// The identifier shown to users: the custom URL when set, else the raw ID.
    pub fn display_id(&self) -> &str {
        self.custom_url.as_deref().unwrap_or(&self.channel_id)
    }

    /// Scoring input built from this overview.
    pub fn to_input(&self) -> AnalysisInput {
        AnalysisInput {
            subscriber_count: self.subscriber_count,
            videos: self.recent_videos.iter().map(RecentVideo::metric).collect(),
        }
    }
}

/// Resolves a channel or video URL into channel metrics.
#[async_trait]
pub trait ChannelSource: Send + Sync {
    async fn fetch_channel(&self, url: &str) -> Result<ChannelOverview, SourceError>;
}
