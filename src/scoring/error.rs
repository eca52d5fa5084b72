use thiserror::Error;

/// Rejected scoring input. Scoring is pure, so retrying never helps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("at least one video is required")]
    NoVideos,

    #[error("subscriber count must be greater than zero")]
    ZeroSubscribers,

    #[error("every video has zero views; engagement rate is undefined")]
    NoViewedVideos,
}
