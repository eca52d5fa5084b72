// Analysis handlers.
//
// POST /api/analyze          score metrics the caller already has
// GET  /api/channel/analyze  fetch a channel by URL, then score it
//
// The POST body mirrors what GET /api/channel returns, trimmed to numbers.
// Older front-ends put subscriberCount on each video rather than at the top
// level; the first video's value is used when the top-level one is absent.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pipeline;
use crate::scoring::{self, AnalysisInput, AnalysisReport, VideoMetric};
use crate::web::handlers::channel::{ChannelQuery, ChannelResponse};
use crate::web::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Echoed into logs only
    pub channel_id: Option<String>,
    pub subscriber_count: Option<u64>,
    #[serde(default)]
    pub videos: Vec<AnalyzeVideo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeVideo {
    #[serde(flatten)]
    pub metric: VideoMetric,
    pub subscriber_count: Option<u64>,
}

impl AnalyzeRequest {
    /// Convert to scoring input, resolving where the subscriber count lives.
    pub fn into_input(self) -> Result<AnalysisInput, ApiError> {
        let subscriber_count = self
            .subscriber_count
            .or_else(|| self.videos.first().and_then(|v| v.subscriber_count))
            .ok_or_else(|| ApiError::BadRequest("subscriberCount is required".to_string()))?;

        Ok(AnalysisInput {
            subscriber_count,
            videos: self.videos.into_iter().map(|v| v.metric).collect(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisReport,
}

#[derive(Debug, Serialize)]
pub struct ChannelAnalysisResponse {
    pub channel: ChannelResponse,
    pub analysis: AnalysisReport,
}

/// POST /api/analyze: score caller-supplied metrics.
pub async fn analyze_metrics(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    debug!(
        channel_id = request.channel_id.as_deref().unwrap_or("-"),
        videos = request.videos.len(),
        "Analyze request"
    );

    let input = request.into_input()?;
    let analysis = scoring::analyze(&input, state.clock.as_ref())?;

    Ok(Json(AnalyzeResponse { analysis }))
}

/// GET /api/channel/analyze: fetch a channel and score it.
pub async fn analyze_channel(
    State(state): State<AppState>,
    Query(params): Query<ChannelQuery>,
) -> Result<Json<ChannelAnalysisResponse>, ApiError> {
    let url = params.require_url()?;
    let result =
        pipeline::channel::run(state.source.as_ref(), state.clock.as_ref(), url).await?;

    Ok(Json(ChannelAnalysisResponse {
        channel: ChannelResponse::from(&result.channel),
        analysis: result.analysis,
    }))
}
