#[cfg(feature = "web")]
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use channelscope::config::Config;
use channelscope::scoring::SystemClock;
use channelscope::source::ChannelSource;
use channelscope::youtube::YouTubeClient;

/// channelscope: size and performance scoring for YouTube channels.
///
/// Classifies a channel by subscriber count and scores its recent uploads
/// for view momentum and viewer engagement.
#[derive(Parser)]
#[command(name = "channelscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: PORT env var, then 4001)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: CHANNELSCOPE_BIND env var, then 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Fetch a channel and score its recent uploads
    Analyze {
        /// Channel, handle, or video URL (e.g. https://www.youtube.com/@somecreator)
        url: String,

        /// Print the result as JSON instead of a colored report
        #[arg(long)]
        json: bool,
    },

    /// Show a channel's subscriber count and recent uploads
    Channel {
        /// Channel, handle, or video URL
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("channelscope=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            config.require_api_key()?;
            let client = build_client(&config)?;

            let state = channelscope::web::AppState {
                source: Arc::new(client),
                clock: Arc::new(SystemClock),
            };
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());

            tracing::info!(port, bind = %bind, "Starting API server");
            channelscope::web::run_server(state, port, &bind).await?;
        }

        Commands::Analyze { url, json } => {
            config.require_api_key()?;
            let client = build_client(&config)?;

            let spinner = fetch_spinner(&url);
            let result = channelscope::pipeline::channel::run(&client, &SystemClock, &url).await;
            spinner.finish_and_clear();

            let result = result.with_context(|| format!("Failed to analyze {url}"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                channelscope::output::terminal::display_analysis(&result);
            }
        }

        Commands::Channel { url } => {
            config.require_api_key()?;
            let client = build_client(&config)?;

            let spinner = fetch_spinner(&url);
            let channel = client.fetch_channel(&url).await;
            spinner.finish_and_clear();

            let channel = channel.with_context(|| format!("Failed to fetch {url}"))?;
            channelscope::output::terminal::display_channel(&channel);
            println!(
                "\n{}",
                format!("To score it, run: channelscope analyze {url}").dimmed()
            );
        }
    }

    Ok(())
}

/// Build the YouTube client from configuration.
fn build_client(config: &Config) -> Result<YouTubeClient> {
    YouTubeClient::new(
        &config.youtube_api_url,
        &config.youtube_api_key,
        config.recent_videos,
    )
}

/// Spinner shown while the YouTube API calls are in flight.
fn fetch_spinner(url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .expect("valid template"),
    );
    spinner.set_message(format!("Fetching {url}..."));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}
