// Unit tests for the YouTube collaborator.
//
// Tests URL parsing, serde deserialization of Data API responses, count
// coercion, and video conversion: all without network access.

use channelscope::source::SourceError;
use channelscope::youtube::channel::to_recent_video;
use channelscope::youtube::models::{
    parse_count, ChannelItem, ListResponse, PlaylistItem, SearchResult, VideoItem,
};
use channelscope::youtube::{ChannelRef, YouTubeClient};
use chrono::{TimeZone, Utc};

// ============================================================
// ChannelRef::parse
// ============================================================

#[test]
fn parse_handle_url() {
    assert_eq!(
        ChannelRef::parse("https://www.youtube.com/@somecreator").unwrap(),
        ChannelRef::Handle("somecreator".to_string())
    );
}

#[test]
fn parse_handle_without_scheme() {
    assert_eq!(
        ChannelRef::parse("youtube.com/@somecreator").unwrap(),
        ChannelRef::Handle("somecreator".to_string())
    );
}

#[test]
fn parse_mobile_handle_url() {
    assert_eq!(
        ChannelRef::parse("https://m.youtube.com/@somecreator/shorts").unwrap(),
        ChannelRef::Handle("somecreator".to_string())
    );
}

#[test]
fn parse_unicode_handle() {
    assert_eq!(
        ChannelRef::parse("https://www.youtube.com/@한국채널").unwrap(),
        ChannelRef::Handle("한국채널".to_string())
    );
}

#[test]
fn parse_encoded_unicode_handle() {
    // Browsers copy the percent-encoded form
    assert_eq!(
        ChannelRef::parse("https://www.youtube.com/@%ED%95%9C%EA%B5%AD%EC%B1%84%EB%84%90/videos")
            .unwrap(),
        ChannelRef::Handle("한국채널".to_string())
    );
}

#[test]
fn parse_watch_url() {
    assert_eq!(
        ChannelRef::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
        ChannelRef::Video("dQw4w9WgXcQ".to_string())
    );
}

#[test]
fn parse_watch_url_with_leading_params() {
    assert_eq!(
        ChannelRef::parse("https://www.youtube.com/watch?list=PL1&v=dQw4w9WgXcQ").unwrap(),
        ChannelRef::Video("dQw4w9WgXcQ".to_string())
    );
}

#[test]
fn parse_short_link() {
    assert_eq!(
        ChannelRef::parse("https://youtu.be/dQw4w9WgXcQ?si=share").unwrap(),
        ChannelRef::Video("dQw4w9WgXcQ".to_string())
    );
}

#[test]
fn parse_channel_id_url() {
    assert_eq!(
        ChannelRef::parse("https://www.youtube.com/channel/UC_x5XG1OV2P6uZZ5FSM9Ttw").unwrap(),
        ChannelRef::Id("UC_x5XG1OV2P6uZZ5FSM9Ttw".to_string())
    );
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(
        ChannelRef::parse("  https://www.youtube.com/@spaced  ").unwrap(),
        ChannelRef::Handle("spaced".to_string())
    );
}

#[test]
fn parse_rejects_unrecognized_youtube_path() {
    let err = ChannelRef::parse("https://www.youtube.com/invalid").unwrap_err();
    assert!(matches!(err, SourceError::InvalidUrl(_)));
}

#[test]
fn parse_rejects_watch_without_video_id() {
    assert!(ChannelRef::parse("https://www.youtube.com/watch?t=10").is_err());
    assert!(ChannelRef::parse("https://www.youtube.com/watch?v=").is_err());
}

#[test]
fn parse_rejects_empty_and_garbage() {
    assert!(ChannelRef::parse("").is_err());
    assert!(ChannelRef::parse("   ").is_err());
    assert!(ChannelRef::parse("not a url at all").is_err());
}

#[test]
fn parse_rejects_bare_short_link() {
    assert!(ChannelRef::parse("https://youtu.be/").is_err());
}

// ============================================================
// Response deserialization
// ============================================================

#[test]
fn deserialize_empty_list_without_items() {
    // The API omits `items` entirely when nothing matches
    let json = r#"{"kind": "youtube#channelListResponse", "pageInfo": {"totalResults": 0}}"#;
    let resp: ListResponse<ChannelItem> = serde_json::from_str(json).unwrap();
    assert!(resp.items.is_empty());
}

#[test]
fn deserialize_search_result() {
    let json = r#"{
        "items": [
            {
                "kind": "youtube#searchResult",
                "id": {"kind": "youtube#channel", "channelId": "UCabc"},
                "snippet": {"channelId": "UCabc", "title": "Some Creator"}
            }
        ]
    }"#;
    let resp: ListResponse<SearchResult> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.items[0].snippet.channel_id, "UCabc");
}

#[test]
fn deserialize_channel_item() {
    let json = r#"{
        "items": [
            {
                "id": "UCabc",
                "snippet": {"title": "Some Creator", "customUrl": "@somecreator"},
                "statistics": {
                    "viewCount": "123456",
                    "subscriberCount": "4200",
                    "hiddenSubscriberCount": false,
                    "videoCount": "87"
                },
                "contentDetails": {"relatedPlaylists": {"likes": "", "uploads": "UUabc"}}
            }
        ]
    }"#;
    let resp: ListResponse<ChannelItem> = serde_json::from_str(json).unwrap();
    let channel = &resp.items[0];
    assert_eq!(channel.id, "UCabc");
    assert_eq!(channel.snippet.custom_url.as_deref(), Some("@somecreator"));
    assert_eq!(
        parse_count(channel.statistics.subscriber_count.as_deref()),
        4200
    );
    assert!(!channel.statistics.hidden_subscriber_count);
    assert_eq!(channel.content_details.related_playlists.uploads, "UUabc");
}

#[test]
fn deserialize_channel_with_hidden_subscribers() {
    let json = r#"{
        "id": "UChidden",
        "snippet": {"title": "Private Numbers"},
        "statistics": {"viewCount": "10", "hiddenSubscriberCount": true},
        "contentDetails": {"relatedPlaylists": {"uploads": "UUhidden"}}
    }"#;
    let channel: ChannelItem = serde_json::from_str(json).unwrap();
    assert!(channel.statistics.hidden_subscriber_count);
    assert!(channel.statistics.subscriber_count.is_none());
    assert!(channel.snippet.custom_url.is_none());
}

#[test]
fn deserialize_playlist_items() {
    let json = r#"{
        "items": [
            {"contentDetails": {"videoId": "v1", "videoPublishedAt": "2025-01-01T00:00:00Z"}},
            {"contentDetails": {"videoId": "v2"}}
        ]
    }"#;
    let resp: ListResponse<PlaylistItem> = serde_json::from_str(json).unwrap();
    let ids: Vec<&str> = resp
        .items
        .iter()
        .map(|i| i.content_details.video_id.as_str())
        .collect();
    assert_eq!(ids, vec!["v1", "v2"]);
}

fn video_json(published_at: &str, statistics: &str) -> String {
    format!(
        r#"{{
            "id": "vid42",
            "snippet": {{
                "channelId": "UCabc",
                "title": "A video",
                "publishedAt": "{published_at}",
                "thumbnails": {{
                    "default": {{"url": "https://i.ytimg.com/vi/vid42/default.jpg"}},
                    "medium": {{"url": "https://i.ytimg.com/vi/vid42/mqdefault.jpg"}}
                }}
            }},
            "statistics": {statistics}
        }}"#
    )
}

#[test]
fn video_item_converts_to_recent_video() {
    let json = video_json(
        "2025-05-20T15:04:05Z",
        r#"{"viewCount": "1000", "likeCount": "80", "commentCount": "20", "favoriteCount": "0"}"#,
    );
    let item: VideoItem = serde_json::from_str(&json).unwrap();
    let video = to_recent_video(item).unwrap();

    assert_eq!(video.id, "vid42");
    assert_eq!(video.url, "https://www.youtube.com/watch?v=vid42");
    assert_eq!(
        video.thumbnail.as_deref(),
        Some("https://i.ytimg.com/vi/vid42/mqdefault.jpg")
    );
    assert_eq!(
        video.published_at,
        Utc.with_ymd_and_hms(2025, 5, 20, 15, 4, 5).unwrap()
    );
    assert_eq!(video.view_count, 1000);
    assert_eq!(video.like_count, 80);
    assert_eq!(video.comment_count, 20);
}

#[test]
fn video_with_disabled_likes_and_comments_counts_zero() {
    let json = video_json("2025-05-20T15:04:05Z", r#"{"viewCount": "321"}"#);
    let item: VideoItem = serde_json::from_str(&json).unwrap();
    let video = to_recent_video(item).unwrap();
    assert_eq!(video.view_count, 321);
    assert_eq!(video.like_count, 0);
    assert_eq!(video.comment_count, 0);
}

#[test]
fn video_with_offset_timestamp_is_normalized_to_utc() {
    let json = video_json("2025-05-21T00:04:05+09:00", r#"{"viewCount": "1"}"#);
    let item: VideoItem = serde_json::from_str(&json).unwrap();
    let video = to_recent_video(item).unwrap();
    assert_eq!(
        video.published_at,
        Utc.with_ymd_and_hms(2025, 5, 20, 15, 4, 5).unwrap()
    );
}

#[test]
fn video_with_bad_timestamp_is_dropped() {
    let json = video_json("yesterday", r#"{"viewCount": "1"}"#);
    let item: VideoItem = serde_json::from_str(&json).unwrap();
    assert!(to_recent_video(item).is_none());
}

#[test]
fn parse_count_is_lenient_only_at_the_boundary() {
    assert_eq!(parse_count(Some("0")), 0);
    assert_eq!(parse_count(Some("18446744073709551615")), u64::MAX);
    assert_eq!(parse_count(Some("1.5")), 0);
    assert_eq!(parse_count(Some("")), 0);
}

// ============================================================
// YouTubeClient errors
// ============================================================

#[tokio::test]
async fn request_error_does_not_expose_api_key() {
    // Nothing listens on port 1, so the request fails before any response
    let client = YouTubeClient::new("http://127.0.0.1:1", "SECRETKEY123", 5).unwrap();
    let err = client
        .api_get::<serde_json::Value>("channels", &[("id", "x")])
        .await
        .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("channels"), "got: {message}");
    assert!(!message.contains("SECRETKEY123"), "API key in error: {message}");
    assert!(!message.contains("key="), "request URL in error: {message}");
}
