// Time decay: normalizes view counts for how long a video has been public.

use chrono::{DateTime, Utc};

const MILLIS_PER_WEEK: f64 = 7.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Fractional weeks between publication and `now`, floored at 1.0.
///
/// The floor keeps brand-new videos from dividing by a near-zero age, and
/// also covers timestamps that are in the future relative to `now`.
pub fn weeks_since(published_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let elapsed_ms = (now - published_at).num_milliseconds() as f64;
    (elapsed_ms / MILLIS_PER_WEEK).max(1.0)
}

/// Raw views discounted by the square root of the video's age in weeks.
pub fn adjusted_views(view_count: u64, weeks: f64) -> f64 {
    view_count as f64 / weeks.sqrt()
}
