//! Build an RSS feed from a saved Telegram channel listing page.
//!
//! Reads HTML from a file or stdin and writes RSS (or JSON) to stdout:
//!
//! ```text
//! curl -s https://t.me/s/durov | channel_feed --channel durov
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tfeed::{extract_feed_bytes, url_utils, FeedAggregate, Options};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Rss,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "channel_feed",
    about = "Get RSS feed from public telegram channel without API key."
)]
struct Args {
    /// Channel name, resolved against --base-url.
    #[arg(long, conflicts_with = "url", required_unless_present = "url")]
    channel: Option<String>,

    /// Listing URL the page was fetched from.
    #[arg(long)]
    url: Option<String>,

    /// Listing page base URL.
    #[arg(long, default_value = tfeed::DEFAULT_BASE_URL)]
    base_url: String,

    /// Feed time-to-live in minutes.
    #[arg(long, default_value_t = 1)]
    ttl: u32,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Rss)]
    format: Format,

    /// Saved listing page; stdin when omitted.
    input: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn read_input(path: Option<&PathBuf>) -> tfeed::Result<Vec<u8>> {
    match path {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn render(feed: &FeedAggregate, format: Format) -> tfeed::Result<String> {
    match format {
        Format::Rss => tfeed::to_rss(feed),
        Format::Json => {
            serde_json::to_string_pretty(feed).map_err(|e| tfeed::Error::Render(e.to_string()))
        }
    }
}

fn run(args: &Args) -> tfeed::Result<String> {
    let options = Options {
        ttl: args.ttl,
        base_url: args.base_url.clone(),
        ..Options::default()
    };

    let url = match (&args.url, &args.channel) {
        (Some(url), _) => url.clone(),
        (None, Some(channel)) => url_utils::channel_url(&options.base_url, channel)?,
        (None, None) => unreachable!("clap requires --channel or --url"),
    };

    let html = read_input(args.input.as_ref())?;
    tracing::info!(%url, bytes = html.len(), "extracting channel feed");

    let feed = extract_feed_bytes(&html, &url, &options)?;
    tracing::info!(entries = feed.entries.len(), title = %feed.title, "feed extracted");

    render(&feed, args.format)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "channel_feed failed");
            eprintln!("channel_feed: {err}");
            ExitCode::FAILURE
        }
    }
}
