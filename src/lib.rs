//! # tfeed
//!
//! RSS feeds for public Telegram channels, without an API key.
//!
//! The crate reads the HTML of a channel's web preview page
//! (`https://t.me/s/<channel>`) and rebuilds every message as a feed entry:
//! author, publish time, permalink, a short title and a normalized HTML
//! description that re-embeds quoted replies, link previews and the first
//! attached photo.
//!
//! ## Quick Start
//!
//! ```rust
//! use tfeed::{extract_feed, Options};
//!
//! let html = r#"<html><head>
//!   <meta property="og:title" content="Channel">
//!   <meta property="og:description" content="News">
//! </head><body>
//!   <div class="tgme_widget_message_wrap">
//!     <a class="tgme_widget_message_owner_name" href="https://t.me/channel">Channel</a>
//!     <div class="tgme_widget_message_text js-message_text">Hello</div>
//!     <a class="tgme_widget_message_date" href="https://t.me/channel/1">
//!       <time class="time" datetime="2024-03-01T10:00:00+00:00">10:00</time>
//!     </a>
//!   </div>
//! </body></html>"#;
//!
//! let feed = extract_feed(html, "https://t.me/s/channel", &Options::default())?;
//! assert_eq!(feed.entries[0].title, "Hello...");
//! let xml = tfeed::to_rss(&feed)?;
//! # Ok::<(), tfeed::Error>(())
//! ```
//!
//! Fetching the page is left to the caller; extraction does no I/O.

mod error;
mod options;
mod patterns;
mod result;

/// DOM lookups with explicit optional/required results.
pub mod dom;

/// Message and document extraction.
pub mod extractor;

/// Listing and public channel URLs.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// RSS 2.0 rendering.
pub mod render;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_BASE_URL, DEFAULT_TITLE_LENGTH};
pub use render::to_rss;
pub use result::{FeedAggregate, FeedEntry};

/// Extracts a channel feed from listing page HTML.
///
/// `url` is the listing URL the page was fetched from; the feed link is its
/// public form.
pub fn extract_feed(html: &str, url: &str, options: &Options) -> Result<FeedAggregate> {
    let doc = dom::parse(html);
    extractor::extract_document(&doc, url, options)
}

/// Extracts a channel feed from raw page bytes with charset detection.
pub fn extract_feed_bytes(html: &[u8], url: &str, options: &Options) -> Result<FeedAggregate> {
    let html = encoding::transcode_to_utf8(html);
    extract_feed(&html, url, options)
}

/// Extracts the feed for a channel name, resolving its listing URL from
/// `options.base_url`.
pub fn extract_channel(html: &str, channel: &str, options: &Options) -> Result<FeedAggregate> {
    let url = url_utils::channel_url(&options.base_url, channel)?;
    extract_feed(html, &url, options)
}
