// Channel data sources: the collaborators that feed the scoring core.

pub mod traits;

pub use traits::{ChannelOverview, ChannelSource, RecentVideo, SourceError};
