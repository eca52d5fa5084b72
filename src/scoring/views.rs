// View momentum: time-decayed views relative to audience size.
//
// Raw view counts are not comparable across videos of different ages, so
// each one is discounted by the square root of its age in weeks first. The
// mean adjusted view count is then divided by the subscriber count so that
// channels of different scale land on the same scale.

use chrono::{DateTime, Utc};

use super::decay::{adjusted_views, weeks_since};
use super::error::InvalidInput;
use super::grade::{Grade, ScoreResult};
use super::models::VideoMetric;

/// Score view momentum for a batch of videos.
///
/// Fails on an empty batch or a zero subscriber count rather than returning
/// NaN or infinity.
pub fn score_views(
    videos: &[VideoMetric],
    subscriber_count: u64,
    now: DateTime<Utc>,
) -> Result<ScoreResult, InvalidInput> {
    if videos.is_empty() {
        return Err(InvalidInput::NoVideos);
    }
    if subscriber_count == 0 {
        return Err(InvalidInput::ZeroSubscribers);
    }

    let total: f64 = videos
        .iter()
        .map(|v| adjusted_views(v.view_count, weeks_since(v.published_at, now)))
        .sum();
    let average_adjusted_views = total / videos.len() as f64;
    let score = average_adjusted_views / subscriber_count as f64;

    Ok(ScoreResult::graded(score, describe))
}

fn describe(grade: Grade) -> &'static str {
    match grade {
        Grade::High => "Excellent view performance",
        Grade::Medium => "Average view performance",
        Grade::Low => "View performance needs improvement",
    }
}
