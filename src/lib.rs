// channelscope: size and performance scoring for YouTube channels.
//
// This is the library root. The scoring core is pure; everything around it
// (YouTube client, web API, terminal output) feeds it or presents it.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod source;
pub mod youtube;

#[cfg(feature = "web")]
pub mod web;
