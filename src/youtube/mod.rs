// YouTube Data API client: channel resolution and recent-video statistics.
//
// Each submodule handles one piece: URL parsing, the HTTP client, response
// types, and the channel fetch flow.

pub mod channel;
pub mod channel_ref;
pub mod client;
pub mod models;

pub use channel_ref::ChannelRef;
pub use client::YouTubeClient;
