// Engagement: how often viewers like or comment.
//
// Per video: (likes + comments) / views, averaged across the batch.
// A video with zero views has no defined rate. Those videos are left out of
// the average; the batch is rejected only if none of them has been viewed.

use tracing::debug;

use super::error::InvalidInput;
use super::grade::{Grade, ScoreResult};
use super::models::VideoMetric;

/// Engagement rate for one video, or `None` if it has no views.
pub fn engagement_rate(video: &VideoMetric) -> Option<f64> {
    if video.view_count == 0 {
        return None;
    }
    let interactions = video.like_count.saturating_add(video.comment_count);
    Some(interactions as f64 / video.view_count as f64)
}

/// Score mean engagement across a batch of videos.
pub fn score_engagement(videos: &[VideoMetric]) -> Result<ScoreResult, InvalidInput> {
    if videos.is_empty() {
        return Err(InvalidInput::NoVideos);
    }

    let rates: Vec<f64> = videos.iter().filter_map(engagement_rate).collect();
    if rates.is_empty() {
        return Err(InvalidInput::NoViewedVideos);
    }

    let skipped = videos.len() - rates.len();
    if skipped > 0 {
        debug!(
            skipped,
            total = videos.len(),
            "Excluded zero-view videos from engagement"
        );
    }

    let score = rates.iter().sum::<f64>() / rates.len() as f64;
    Ok(ScoreResult::graded(score, describe))
}

fn describe(grade: Grade) -> &'static str {
    match grade {
        Grade::High => "Very high viewer engagement",
        Grade::Medium => "Average viewer engagement",
        Grade::Low => "Viewer engagement needs encouragement",
    }
}
