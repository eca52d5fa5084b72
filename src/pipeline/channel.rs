// Channel analysis pipeline: resolve URL -> fetch metrics -> score.
//
// Used by both the `analyze` CLI command and the one-shot
// `/api/channel/analyze` endpoint.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::scoring::{self, AnalysisReport, Clock, InvalidInput};
use crate::source::{ChannelOverview, ChannelSource, SourceError};

/// A fetched channel together with its scores.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelAnalysis {
    pub channel: ChannelOverview,
    pub analysis: AnalysisReport,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Input(#[from] InvalidInput),
}

/// Fetch a channel through `source` and score it.
pub async fn run(
    source: &dyn ChannelSource,
    clock: &dyn Clock,
    url: &str,
) -> Result<ChannelAnalysis, AnalysisError> {
    let channel = source.fetch_channel(url).await?;

    info!(
        channel = channel.display_id(),
        subscribers = channel.subscriber_count,
        videos = channel.recent_videos.len(),
        "Fetched channel for analysis"
    );

    let analysis = scoring::analyze(&channel.to_input(), clock)?;

    Ok(ChannelAnalysis { channel, analysis })
}
