// Colored terminal output for channel overviews and analysis reports.
//
// The CLI commands in main.rs delegate here for anything user-facing.

use colored::{ColoredString, Colorize};

use crate::pipeline::channel::ChannelAnalysis;
use crate::scoring::{AnalysisReport, Grade, ScoreResult};
use crate::source::ChannelOverview;

use super::{format_count, truncate_chars};

/// Display a channel and its recent uploads.
pub fn display_channel(channel: &ChannelOverview) {
    println!(
        "\n{}",
        format!("=== {} ({}) ===", channel.title, channel.display_id()).bold()
    );
    println!(
        "  Subscribers: {}",
        format_count(channel.subscriber_count)
    );

    if channel.recent_videos.is_empty() {
        println!("  No recent uploads found.");
        return;
    }

    println!();
    println!(
        "  {:<48} {:>12} {:>10} {:>9}  {}",
        "Title".dimmed(),
        "Views".dimmed(),
        "Likes".dimmed(),
        "Comments".dimmed(),
        "Published".dimmed(),
    );
    println!("  {}", "-".repeat(96).dimmed());

    for video in &channel.recent_videos {
        println!(
            "  {:<48} {:>12} {:>10} {:>9}  {}",
            truncate_chars(&video.title, 45),
            format_count(video.view_count),
            format_count(video.like_count),
            format_count(video.comment_count),
            video.published_at.format("%Y-%m-%d"),
        );
    }
}

/// Display a full channel analysis: overview, then scores.
pub fn display_analysis(result: &ChannelAnalysis) {
    display_channel(&result.channel);
    display_report(&result.analysis);
}

/// Display the scores from an analysis report.
pub fn display_report(report: &AnalysisReport) {
    println!("\n{}", "=== Analysis ===".bold());
    println!(
        "  Channel size: {} (tier {}), {}",
        report.channel_size.label().bold(),
        report.channel_size.tier(),
        report.channel_size.description()
    );
    println!();
    display_score("Views", &report.metrics.views);
    display_score("Engagement", &report.metrics.engagement);
    println!();
}

fn display_score(name: &str, result: &ScoreResult) {
    println!(
        "  {:<11} {:>8.3}  {:<8} {}",
        name,
        result.score,
        colorize_grade(result.grade),
        result.description.dimmed()
    );
}

fn colorize_grade(grade: Grade) -> ColoredString {
    match grade {
        Grade::High => grade.as_str().green().bold(),
        Grade::Medium => grade.as_str().yellow(),
        Grade::Low => grade.as_str().red(),
    }
}
