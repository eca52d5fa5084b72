// Report builder: runs every scorer for one channel.
//
// Given a channel's subscriber count and recent videos, this module:
// 1. Classifies the channel by size
// 2. Reads the clock once for the whole pass
// 3. Scores view momentum and engagement over the same videos
// 4. Returns the merged AnalysisReport

use tracing::info;

use super::channel_size::ChannelSize;
use super::clock::Clock;
use super::engagement::score_engagement;
use super::error::InvalidInput;
use super::models::{AnalysisInput, AnalysisReport, Metrics};
use super::views::score_views;

/// Build the full analysis report for one channel.
pub fn analyze(input: &AnalysisInput, clock: &dyn Clock) -> Result<AnalysisReport, InvalidInput> {
    let channel_size = ChannelSize::classify(input.subscriber_count);
    let now = clock.now();

    let views = score_views(&input.videos, input.subscriber_count, now)?;
    let engagement = score_engagement(&input.videos)?;

    info!(
        subscribers = input.subscriber_count,
        videos = input.videos.len(),
        size = channel_size.label(),
        views = format!("{:.3}", views.score),
        views_grade = views.grade.as_str(),
        engagement = format!("{:.3}", engagement.score),
        engagement_grade = engagement.grade.as_str(),
        "Analyzed channel"
    );

    Ok(AnalysisReport {
        channel_size,
        metrics: Metrics { views, engagement },
    })
}
