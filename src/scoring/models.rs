// Scoring models: the validated numeric input and the assembled report.
//
// These types carry no I/O concerns. Whatever produced them (the YouTube
// client, an API request body) has already turned raw upstream data into
// plain numbers and timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::channel_size::ChannelSize;
use super::grade::ScoreResult;

/// Public metrics for a single video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetric {
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub published_at: DateTime<Utc>,
}

/// Everything the scorers need for one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub subscriber_count: u64,
    pub videos: Vec<VideoMetric>,
}

/// The two performance sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub views: ScoreResult,
    pub engagement: ScoreResult,
}

/// Channel classification plus performance scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub channel_size: ChannelSize,
    pub metrics: Metrics,
}
